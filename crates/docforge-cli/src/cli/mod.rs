//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use docforge_core::domain::Layer as CoreLayer;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "docforge",
    bin_name = "docforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Documentation project scaffolding",
    long_about = "Docforge scaffolds a documentation project's folder layout: \
                  numbered layer folders, seed index pages, and a generated \
                  project index.",
    after_help = "EXAMPLES:\n\
        \x20 docforge new                                    # fully interactive\n\
        \x20 docforge new \"My Cool App\" --layers planning,backend --yes\n\
        \x20 docforge layers --format json\n\
        \x20 docforge completions bash > /usr/share/bash-completion/completions/docforge",
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
    /// Scaffold a new documentation project.
    #[command(
        visible_alias = "n",
        about = "Create a new documentation project",
        after_help = "EXAMPLES:\n\
            \x20 docforge new\n\
            \x20 docforge new \"My Cool App\" --layers planning,incidents --yes\n\
            \x20 docforge new Demo --layers backend --services auth,api --yes\n\
            \x20 docforge new Demo --layers planning --dry-run --yes"
    )]
    New(NewArgs),

    /// List the available documentation layers.
    #[command(
        visible_alias = "ls",
        about = "List available layers",
        after_help = "EXAMPLES:\n\
            \x20 docforge layers\n\
            \x20 docforge layers --format json"
    )]
    Layers(LayersArgs),

    /// Initialise a docforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 docforge init           # write the default config\n\
            \x20 docforge init --force   # overwrite an existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 docforge completions bash > ~/.local/share/bash-completion/completions/docforge\n\
            \x20 docforge completions zsh  > ~/.zfunc/_docforge\n\
            \x20 docforge completions fish > ~/.config/fish/completions/docforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `docforge new`.
///
/// Every prompt of the interactive flow can be pre-answered by a flag;
/// with NAME, `--layers` and `--yes` given, no terminal interaction
/// happens at all.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Human-readable project name; the directory name is its slug.
    #[arg(value_name = "NAME", help = "Project name (prompted if omitted)")]
    pub name: Option<String>,

    /// Layers to create, comma-separated.
    #[arg(
        short = 'L',
        long = "layers",
        value_name = "LAYERS",
        value_enum,
        value_delimiter = ',',
        help = "Layers to create (prompted if omitted)"
    )]
    pub layers: Option<Vec<LayerArg>>,

    /// Backend service names, comma-separated. Only used with a backend
    /// layer; a backend layer without this flag gets the single service
    /// "core".
    #[arg(
        short = 's',
        long = "services",
        value_name = "NAMES",
        value_delimiter = ',',
        help = "Backend service names (default: core)"
    )]
    pub services: Option<Vec<String>>,

    /// Override the configured projects directory.
    #[arg(
        short = 'o',
        long = "projects-dir",
        value_name = "DIR",
        help = "Directory that holds documentation projects"
    )]
    pub projects_dir: Option<std::path::PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `docforge layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayersFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayersFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `docforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `docforge completions`.
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

// ── value enums ───────────────────────────────────────────────────────────────

/// Layer selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum LayerArg {
    Planning,
    #[value(alias = "frontend")]
    WebFrontend,
    #[value(alias = "mobile")]
    MobileApp,
    Backend,
    #[value(alias = "infra")]
    Infrastructure,
    Testing,
    Incidents,
}

impl From<LayerArg> for CoreLayer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Planning => CoreLayer::Planning,
            LayerArg::WebFrontend => CoreLayer::WebFrontend,
            LayerArg::MobileApp => CoreLayer::MobileApp,
            LayerArg::Backend => CoreLayer::Backend,
            LayerArg::Infrastructure => CoreLayer::Infrastructure,
            LayerArg::Testing => CoreLayer::Testing,
            LayerArg::Incidents => CoreLayer::Incidents,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command_with_flags() {
        let cli = Cli::parse_from([
            "docforge",
            "new",
            "My Cool App",
            "--layers",
            "planning,backend",
            "--yes",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name.as_deref(), Some("My Cool App"));
        assert_eq!(
            args.layers,
            Some(vec![LayerArg::Planning, LayerArg::Backend])
        );
        assert!(args.yes);
    }

    #[test]
    fn layer_aliases_parse() {
        let cli = Cli::parse_from([
            "docforge", "new", "x", "--layers", "frontend,mobile,infra", "--yes",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(
            args.layers,
            Some(vec![
                LayerArg::WebFrontend,
                LayerArg::MobileApp,
                LayerArg::Infrastructure
            ])
        );
    }

    #[test]
    fn services_are_comma_split() {
        let cli = Cli::parse_from([
            "docforge", "new", "x", "--layers", "backend", "--services", "auth,api", "--yes",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(
            args.services,
            Some(vec!["auth".to_string(), "api".to_string()])
        );
    }

    #[test]
    fn layer_arg_maps_onto_core() {
        assert_eq!(CoreLayer::from(LayerArg::Incidents), CoreLayer::Incidents);
        assert_eq!(CoreLayer::from(LayerArg::WebFrontend), CoreLayer::WebFrontend);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["docforge", "--quiet", "--verbose", "layers"]);
        assert!(result.is_err());
    }
}
