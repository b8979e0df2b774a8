//! Implementation of the `avsforge create` command.
//!
//! Responsibility: translate CLI arguments into [`ConfigDefaults`], pick a
//! configuration provider, call the core generate service, and display
//! results.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use avsforge_adapters::{BundledResources, FixedConfigProvider, LocalFilesystem, SimpleRenderer};
use avsforge_core::{
    application::{GenerateService, ports::ConfigProvider},
    domain::{ConfigDefaults, TemplateKind, layout},
};

use crate::{
    cli::{CreateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `avsforge create` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name and base directory from the positional
///    argument (falling back to the configured default name)
/// 2. Resolve template and description from flags, then config defaults
/// 3. Early-exit if `--dry-run`
/// 4. Pick the configuration provider (interactive when a TTY is attached
///    and `--yes` was not passed)
/// 5. Assemble adapters and run the generate service
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name + base directory
    let raw_name = args
        .name
        .unwrap_or_else(|| config.defaults.project_name.clone());
    let (project_name, base_dir) = split_project_path(&raw_name)?;

    // 2. Template + description
    let template = match args.template {
        Some(choice) => choice.into(),
        None => TemplateKind::parse(&config.defaults.template).map_err(|e| {
            CliError::ConfigError {
                message: format!("invalid default template: {e}"),
            }
        })?,
    };
    let description = args.description.or_else(|| config.defaults.description.clone());

    let mut defaults = ConfigDefaults::new(&project_name, template);
    if let Some(description) = description {
        defaults = defaults.with_description(description);
    }

    debug!(
        project = %project_name,
        base = %base_dir.display(),
        template = %template,
        "create resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            base_dir.join(&project_name).display(),
        ))?;
        output.print(&format!("  Template: {template}"))?;
        output.print("  Files:")?;
        for file in layout::generated_files(template) {
            output.print(&format!("    {file}"))?;
        }
        return Ok(());
    }

    // 4. Configuration provider
    let provider = select_provider(args.yes, global.quiet);

    // 5. Adapters + service
    let service = GenerateService::new(
        provider,
        Box::new(BundledResources::discover()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, "generation started");

    let summary = service.generate(&base_dir, &defaults)?;

    info!(project = %project_name, files = summary.files_written, "generation completed");

    // 6. Success + next steps
    output.success(&format!(
        "Project '{}' created ({} files)",
        project_name, summary.files_written
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print("  npm install")?;
        output.print("  npx hardhat test")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the positional argument into a leaf project name and the explicit
/// base directory the engine generates under.
///
/// A plain `demo` resolves to (`demo`, `.`); a path like `apps/demo`
/// resolves to (`demo`, `apps`).
pub fn split_project_path(raw: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(raw);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: raw.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((project_name, base_dir))
}

// ── Provider selection ────────────────────────────────────────────────────────

/// Interactive when a terminal is attached and neither `--yes` nor
/// `--quiet` was passed; deterministic otherwise.
fn select_provider(yes: bool, quiet: bool) -> Box<dyn ConfigProvider> {
    #[cfg(feature = "interactive")]
    if !yes && !quiet && std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Box::new(crate::prompt::InteractivePrompt::new());
    }
    #[cfg(not(feature = "interactive"))]
    let _ = (yes, quiet);

    Box::new(FixedConfigProvider::new())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
