//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use avsforge_core::domain::TemplateKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "avsforge",
    bin_name = "avsforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2692} Scaffolding for EigenLayer AVS projects",
    long_about = "Avsforge generates ready-to-build AVS project skeletons: \
                  contract stubs, a deployment script, a hardhat test, and \
                  off-chain aggregator/executor services.",
    after_help = "EXAMPLES:\n\
        \x20 avsforge create my-avs\n\
        \x20 avsforge create price-feed --template oracle --description \"Price oracle AVS\"\n\
        \x20 avsforge list\n\
        \x20 avsforge completions bash > /usr/share/bash-completion/completions/avsforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new AVS project from a template.
    #[command(
        visible_alias = "c",
        about = "Create a new AVS project",
        after_help = "EXAMPLES:\n\
            \x20 avsforge create                       # defaults: my-avs, task-based\n\
            \x20 avsforge create my-avs --yes\n\
            \x20 avsforge create apps/demo --template oracle --description \"demo\""
    )]
    Create(CreateArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 avsforge list\n\
            \x20 avsforge list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 avsforge completions bash > ~/.local/share/bash-completion/completions/avsforge\n\
            \x20 avsforge completions zsh  > ~/.zfunc/_avsforge"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `avsforge create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `apps/demo` places the project under `apps/`.  Defaults to the
    /// configured project name (`my-avs`).
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: Option<String>,

    /// Project template.  Defaults to the configured template
    /// (`task-based`).
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        value_enum,
        help = "Project template"
    )]
    pub template: Option<TemplateChoice>,

    /// Description baked into the generated package.json.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Skip the interactive prompt and use flags/defaults as-is.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and create immediately")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Template choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateChoice {
    #[value(name = "task-based")]
    TaskBased,
    Oracle,
}

impl From<TemplateChoice> for TemplateKind {
    fn from(choice: TemplateChoice) -> Self {
        match choice {
            TemplateChoice::TaskBased => TemplateKind::TaskBased,
            TemplateChoice::Oracle => TemplateKind::Oracle,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `avsforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `avsforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
