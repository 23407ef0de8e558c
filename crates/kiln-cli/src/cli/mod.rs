//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kiln_core::domain;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} JavaScript/TypeScript project scaffolds, fired to order",
    long_about = "Kiln turns a handful of choices (framework, language, styling, \
                  package manager, tooling) into a ready-to-use project skeleton \
                  and packages it as a zip archive.",
    after_help = "EXAMPLES:\n\
        \x20 kiln new my-app   --framework react --lang ts --styling tailwind\n\
        \x20 kiln new my-api   --template node-ts-api --extract\n\
        \x20 kiln preview site --framework static --styling css\n\
        \x20 kiln templates --framework next\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
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
    /// Generate a new project archive (or directory with --extract).
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kiln new my-app  --framework next --lang ts\n\
            \x20 kiln new my-app  --template react-vite-ts --output ./dist\n\
            \x20 kiln new my-api  --framework node --no-lint --extract\n\
            \x20 kiln new -m kiln.toml --yes"
    )]
    New(NewArgs),

    /// Print the file tree a manifest would produce.
    #[command(
        visible_alias = "p",
        about = "Preview a scaffold without writing anything",
        after_help = "EXAMPLES:\n\
            \x20 kiln preview my-app --framework react\n\
            \x20 kiln preview my-app --framework react --show src/App.tsx\n\
            \x20 kiln preview my-app --framework next --output-format json"
    )]
    Preview(PreviewArgs),

    /// List the built-in template presets.
    #[command(
        visible_alias = "ls",
        about = "List template presets",
        after_help = "EXAMPLES:\n\
            \x20 kiln templates\n\
            \x20 kiln templates --framework node\n\
            \x20 kiln templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Show the contents of a scaffold archive.
    #[command(
        about = "Inspect a generated archive",
        after_help = "EXAMPLES:\n\
            \x20 kiln inspect my-app-scaffold.zip\n\
            \x20 kiln inspect my-app-scaffold.zip --show package.json"
    )]
    Inspect(InspectArgs),

    /// Initialise a Kiln configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln init           # default location\n\
            \x20 kiln init --local   # .kiln.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kiln configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get defaults.framework\n\
            \x20 kiln config list\n\
            \x20 kiln config path"
    )]
    Config(ConfigCommands),
}

// ── manifest flags ────────────────────────────────────────────────────────────

/// Flags that describe the project. Shared by `new` and `preview`.
///
/// Precedence, highest first: these flags, `--manifest` file, `--template`
/// preset, config defaults.
#[derive(Debug, Default, Args)]
pub struct ManifestArgs {
    /// Project name (npm package name rules).
    #[arg(value_name = "NAME", help = "Project name (lowercase, digits, - and _)")]
    pub name: Option<String>,

    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Framework"
    )]
    pub framework: Option<Framework>,

    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_enum,
        help = "Language"
    )]
    pub language: Option<Language>,

    #[arg(
        short = 's',
        long = "styling",
        value_name = "STYLING",
        value_enum,
        help = "Styling approach"
    )]
    pub styling: Option<Styling>,

    #[arg(
        short = 'p',
        long = "pm",
        value_name = "PM",
        value_enum,
        help = "Package manager"
    )]
    pub package_manager: Option<PackageManager>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "One-line project description"
    )]
    pub description: Option<String>,

    #[arg(long = "no-lint", help = "Skip ESLint")]
    pub no_lint: bool,

    #[arg(long = "no-prettier", help = "Skip Prettier")]
    pub no_prettier: bool,

    #[arg(long = "no-git", help = "Skip .gitignore")]
    pub no_git: bool,

    /// Start from a catalog preset (see `kiln templates`).
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template preset to start from"
    )]
    pub template: Option<String>,

    /// Read choices from a JSON or TOML manifest file.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Manifest file (.json or .toml)"
    )]
    pub manifest: Option<PathBuf>,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kiln new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Directory that receives the archive (or the project with --extract).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Write the project directory instead of a zip archive.
    #[arg(
        short = 'x',
        long = "extract",
        help = "Write files to <OUTPUT>/<NAME> instead of a zip"
    )]
    pub extract: bool,

    /// Overwrite an existing archive or directory (destructive).
    #[arg(long = "force", help = "Overwrite existing output")]
    pub force: bool,

    /// Print the tree without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `kiln preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Print one generated file instead of the tree.
    #[arg(long = "show", value_name = "PATH", help = "Print a single file's content")]
    pub show: Option<String>,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `kiln templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Filter by framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_enum,
        help = "Filter by framework"
    )]
    pub framework: Option<Framework>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `kiln inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Archive produced by `kiln new`.
    #[arg(value_name = "ZIP")]
    pub archive: PathBuf,

    /// Print one entry instead of the tree.
    #[arg(long = "show", value_name = "PATH", help = "Print a single entry's content")]
    pub show: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.kiln.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
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

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Framework {
    /// Also accepted as `nextjs`.
    #[value(alias = "nextjs")]
    Next,
    React,
    /// Also accepted as `nodejs`.
    #[value(alias = "nodejs")]
    Node,
    /// Also accepted as `html`.
    #[value(alias = "html")]
    Static,
}

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `typescript`.
    #[value(alias = "typescript")]
    Ts,
    /// Also accepted as `javascript`.
    #[value(alias = "javascript")]
    Js,
}

/// Supported styling approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Styling {
    Tailwind,
    Css,
    Scss,
    Sass,
    None,
}

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

// ── CLI → core conversions ────────────────────────────────────────────────────

impl From<Framework> for domain::Framework {
    fn from(value: Framework) -> Self {
        match value {
            Framework::Next => Self::Next,
            Framework::React => Self::React,
            Framework::Node => Self::Node,
            Framework::Static => Self::Static,
        }
    }
}

impl From<Language> for domain::Language {
    fn from(value: Language) -> Self {
        match value {
            Language::Ts => Self::Ts,
            Language::Js => Self::Js,
        }
    }
}

impl From<Styling> for domain::Styling {
    fn from(value: Styling) -> Self {
        match value {
            Styling::Tailwind => Self::Tailwind,
            Styling::Css => Self::Css,
            Styling::Scss => Self::Scss,
            Styling::Sass => Self::Sass,
            Styling::None => Self::None,
        }
    }
}

impl From<PackageManager> for domain::PackageManager {
    fn from(value: PackageManager) -> Self {
        match value {
            PackageManager::Npm => Self::Npm,
            PackageManager::Yarn => Self::Yarn,
            PackageManager::Pnpm => Self::Pnpm,
            PackageManager::Bun => Self::Bun,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
