//! Generate Service - the generation orchestrator.
//!
//! This service sequences the whole workflow:
//! 1. Existence precondition on the target path (before any mutation)
//! 2. Configuration collection (through the injected provider)
//! 3. Project root + directory tree creation
//! 4. Component generators, artifacts written dir-before-file
//!
//! Every failure is terminal for the invocation; nothing is retried.
//! There is no rollback: a write failure leaves the partially generated
//! directory on disk for the user to inspect or delete.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, generators,
        ports::{ConfigProvider, Filesystem, ResourceProvider, TemplateRenderer},
    },
    domain::{Artifact, ConfigDefaults, ProjectConfig, TemplateContext, layout},
    error::AvsforgeResult,
};

/// What a successful generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// The created project directory.
    pub project_path: PathBuf,
    /// Number of files written (directories not counted).
    pub files_written: usize,
}

/// Generation orchestrator.
///
/// Holds the four injected ports and runs them in a fixed sequence. The
/// base directory is an explicit parameter of [`generate`](Self::generate);
/// the service never consults the process working directory.
pub struct GenerateService {
    config_provider: Box<dyn ConfigProvider>,
    resources: Box<dyn ResourceProvider>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        config_provider: Box<dyn ConfigProvider>,
        resources: Box<dyn ResourceProvider>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            config_provider,
            resources,
            renderer,
            filesystem,
        }
    }

    /// Generate a project under `base_dir`.
    ///
    /// The target path is `base_dir/<defaults.project_name>`; the existence
    /// precondition runs against it before configuration is collected, so a
    /// failing invocation performs no filesystem mutation at all.
    #[instrument(
        skip_all,
        fields(base = %base_dir.display(), project = %defaults.project_name)
    )]
    pub fn generate(
        &self,
        base_dir: &Path,
        defaults: &ConfigDefaults,
    ) -> AvsforgeResult<GenerationSummary> {
        let project_path = base_dir.join(&defaults.project_name);

        // 1. Precondition: the target must not exist.
        if self.filesystem.exists(&project_path) {
            return Err(ApplicationError::DirectoryExists { path: project_path }.into());
        }

        // 2. Collect the configuration. The provider keeps the project name
        //    settled, so the checked path and the generated path agree.
        let config = self.config_provider.collect(defaults)?;
        info!(template = %config.template(), "configuration collected");

        // 3. Project root, created exactly once, then the fixed tree.
        self.filesystem.create_dir_all(&project_path)?;
        for dir in layout::directory_tree(config.template()) {
            self.filesystem.create_dir_all(&project_path.join(dir.as_path()))?;
        }
        debug!("directory tree created");

        // 4. Component generators, each internally ordered; any write
        //    failure aborts the remainder.
        let mut files_written = 0;
        for artifact in self.collect_artifacts(&config) {
            self.write_artifact(&project_path, &artifact)?;
            files_written += 1;
        }

        info!(files = files_written, "generation complete");
        Ok(GenerationSummary {
            project_path,
            files_written,
        })
    }

    /// Run every component generator against the collected configuration.
    fn collect_artifacts(&self, config: &ProjectConfig) -> Vec<Artifact> {
        let context = TemplateContext::from_config(config);
        let resources = self.resources.as_ref();
        let renderer = self.renderer.as_ref();

        let mut artifacts = Vec::new();
        artifacts.extend(generators::manifest::artifacts(&context, resources, renderer));
        artifacts.extend(generators::contracts::artifacts(resources));
        artifacts.extend(generators::scripts::artifacts(resources));
        artifacts.extend(generators::tests::artifacts(resources));
        artifacts.extend(generators::offchain::artifacts(&context, resources, renderer));
        artifacts
    }

    fn write_artifact(&self, project_path: &Path, artifact: &Artifact) -> AvsforgeResult<()> {
        let path = project_path.join(artifact.relative_path.as_path());
        debug!(path = %path.display(), bytes = artifact.content.len(), "writing artifact");
        self.filesystem.write_file(&path, &artifact.content)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
