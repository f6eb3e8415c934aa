//! CLI argument definitions
//!
//! Clap derive structs for `fixturegen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ConfigOverrides;
use crate::observability::LogFormat;

/// Generate synthetic content, template and page fixtures for a templating tool.
///
/// Writes `content/items/test_content_<n>.md`, `templates/pagination_template.html`
/// and `pages/paged_content.html` under OUTPUT_PATH.
#[derive(Parser, Debug)]
#[command(name = "fixturegen", author, version, about)]
pub struct Cli {
    /// Directory to write the fixture tree into. Shows usage when omitted.
    pub output_path: Option<PathBuf>,

    /// YAML file with generator settings.
    #[arg(short, long, env = "FIXTUREGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// RNG seed for reproducible output.
    #[arg(long, env = "FIXTUREGEN_SEED")]
    pub seed: Option<u64>,

    /// Paragraph pool size.
    #[arg(long, env = "FIXTUREGEN_PARAGRAPHS")]
    pub paragraphs: Option<usize>,

    /// Number of content files to write.
    #[arg(long, env = "FIXTUREGEN_FILES")]
    pub files: Option<usize>,

    /// Also write the templating tool's `config.json` at the output root.
    #[arg(long, env = "FIXTUREGEN_EMIT_SITE_CONFIG")]
    pub emit_site_config: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human", env = "FIXTUREGEN_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "FIXTUREGEN_COLOR")]
    pub color: ColorChoice,
}

impl Cli {
    /// Settings given on the command line that override the config file.
    #[must_use]
    pub const fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            paragraphs: self.paragraphs,
            files: self.files,
        }
    }
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================
