//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ideaforge",
    bin_name = "ideaforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Turn a one-line idea into a project blueprint",
    long_about = "IdeaForge classifies a free-text product idea, recommends a \
                  tech stack, and emits a runnable Next.js starter project.",
    after_help = "EXAMPLES:\n\
        \x20 ideaforge generate \"a chat app for study groups\"\n\
        \x20 ideaforge generate \"an ai tutor\" --format json\n\
        \x20 ideaforge new \"an online checkout for art prints\" --samples --yes\n\
        \x20 ideaforge rules\n\
        \x20 ideaforge completions bash > /usr/share/bash-completion/completions/ideaforge",
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
    /// Generate a blueprint and print it.
    #[command(
        visible_alias = "gen",
        about = "Generate a project blueprint from an idea",
        after_help = "EXAMPLES:\n\
            \x20 ideaforge generate \"teachers upload assignments, students submit work\"\n\
            \x20 ideaforge generate \"a clinic scheduler\" --samples\n\
            \x20 ideaforge generate \"notes app\" --format json | jq .tech_stack"
    )]
    Generate(GenerateArgs),

    /// Generate a blueprint and write its starter files to disk.
    #[command(
        visible_alias = "n",
        about = "Create a starter project from an idea",
        after_help = "EXAMPLES:\n\
            \x20 ideaforge new \"a quiz site for students\"\n\
            \x20 ideaforge new \"an ai shop\" --out my-shop --samples\n\
            \x20 ideaforge new \"notes app\" --dry-run"
    )]
    New(NewArgs),

    /// List the classification and recommendation rules.
    #[command(
        visible_alias = "ls",
        about = "List recognized domains and rules",
        after_help = "EXAMPLES:\n\
            \x20 ideaforge rules\n\
            \x20 ideaforge rules --format json"
    )]
    Rules(RulesArgs),

    /// Initialise an IdeaForge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ideaforge init           # default location\n\
            \x20 ideaforge init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ideaforge completions bash > ~/.local/share/bash-completion/completions/ideaforge\n\
            \x20 ideaforge completions zsh  > ~/.zfunc/_ideaforge\n\
            \x20 ideaforge completions fish > ~/.config/fish/completions/ideaforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the IdeaForge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ideaforge config get defaults.samples\n\
            \x20 ideaforge config list\n\
            \x20 ideaforge config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `ideaforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Free-text product idea.
    #[arg(value_name = "IDEA", help = "Product idea in free text")]
    pub idea: String,

    /// Include the non-JS sample files (FastAPI, Dockerfile, Go).
    #[arg(long = "samples", help = "Include non-JS sample files under recommended/")]
    pub samples: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "report",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

/// Output format for the `generate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report.
    Report,
    /// The full blueprint as pretty-printed JSON.
    Json,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `ideaforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Free-text product idea.
    #[arg(value_name = "IDEA", help = "Product idea in free text")]
    pub idea: String,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory (default: derived from the blueprint title)"
    )]
    pub out: Option<PathBuf>,

    /// Include the non-JS sample files.
    #[arg(long = "samples", help = "Include non-JS sample files under recommended/")]
    pub samples: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `ideaforge rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: RulesFormat,
}

/// Output format for the `rules` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulesFormat {
    /// Human-readable table.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ideaforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ideaforge completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ideaforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.samples`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
