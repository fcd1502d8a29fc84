//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Provider;

/// Generate website color palettes from a few seed colors
#[derive(Parser)]
#[command(name = "chroma", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a six-color palette from seed colors or words
    Generate(GenerateArgs),
    /// Show hex, RGB, HSL and label contrast for colors
    Inspect {
        /// Colors as #RRGGBB
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Copy a color to the clipboard in the chosen format
    Copy {
        /// Color as #RRGGBB
        color: String,
        /// Representation to copy
        #[arg(short, long, value_enum, default_value = "hex")]
        format: CopyFormatArg,
    },
    /// Render the SVG showcase for a saved palette
    Showcase {
        /// Palette JSON written by `chroma generate --save`
        palette: PathBuf,
        /// Where to write the SVG
        #[arg(long)]
        svg: PathBuf,
    },
    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed colors or words, e.g. `navy "#ff8800" sand`
    #[arg(required = true)]
    pub seeds: Vec<String>,
    /// Text model provider. Uses CHROMA_PROVIDER if not set.
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,
    /// Text model. Uses CHROMA_MODEL if not set.
    #[arg(long)]
    pub model: Option<String>,
    /// Also generate a hero background and write it as PNG
    #[arg(long)]
    pub hero: Option<PathBuf>,
    /// Write the geometric showcase as SVG
    #[arg(long)]
    pub svg: Option<PathBuf>,
    /// Save the palette as JSON
    #[arg(long)]
    pub save: Option<PathBuf>,
    /// Request deadline in seconds. Uses CHROMA_TIMEOUT_SECS if not set.
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CopyFormatArg {
    Hex,
    Rgb,
    Hsl,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration with keys masked
    Show,
    /// Store an API key in ~/.chroma/env
    Api {
        /// Provider to configure (gemini, openai)
        #[arg(short, long, value_enum)]
        provider: Option<Provider>,
    },
}
