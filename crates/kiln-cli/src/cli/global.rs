//! Flags shared by every `kiln` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `kiln -q new ...`
//! and `kiln new ... -q` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Logging, output and configuration switches.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output on stderr; repeat for more detail.
    ///
    /// Without the flag only warnings and errors are logged. `-v` adds
    /// progress (info), `-vv` adds debug diagnostics and `-vvv` enables trace.
    /// `RUST_LOG` overrides all of these.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and requested data.
    ///
    /// Also disables prompts, so every manifest field must come from flags, a
    /// manifest file, a template or the config defaults.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain, uncoloured output. Honours `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Extra config file layered over the built-in ones.
    ///
    /// Settings are merged in this order, later wins: built-in defaults, the
    /// user config file, `./.kiln.toml`, this file, then `KILN_*` environment
    /// variables. Unlike the other files, this one must exist.
    #[arg(short, long, global = true, env = "KILN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed.
    ///
    /// `auto` uses `output.format` from the config; if that is also `auto`,
    /// a terminal gets `human` and a pipe gets `plain`. `json` prints one
    /// JSON document on stdout and never prompts.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        value_name = "FORMAT"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Config setting, then terminal detection
    #[default]
    Auto,
    /// Coloured text with symbols
    Human,
    /// Text without colour
    Plain,
    /// A single JSON document
    Json,
}
