//! Logging setup for `fixturegen`.
//!
//! Everything goes to stderr; stdout only ever carries the usage message.
//! The filter comes from the `-v` count unless `FIXTUREGEN_LOG_LEVEL` holds
//! a valid directive, in which case that wins.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable that replaces the `-v` derived filter.
pub const LOG_LEVEL_ENV: &str = "FIXTUREGEN_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Filter directive for a `-v` count.
///
/// Without `-v` only warnings show, which includes a randomly drawn seed.
/// `-v` adds the run summary, `-vv` directory-level detail and `-vvv` one
/// event per file written. Raised levels apply to this crate only.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,fixturegen=info",
        2 => "warn,fixturegen=debug",
        _ => "warn,fixturegen=trace",
    }
}

/// Builds the filter. A blank or unparseable override is ignored.
fn select_filter(verbosity: u8, override_directive: Option<&str>) -> EnvFilter {
    override_directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_to_directive(verbosity)))
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let override_directive = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = select_filter(verbosity, override_directive.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(use_ansi(color)).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Sets up logging as the command line asks. `--quiet` installs nothing.
pub fn init_from_cli(cli: &Cli) {
    if cli.quiet {
        return;
    }
    init_logging(cli.log_format, cli.verbose, cli.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn hint(verbosity: u8, override_directive: Option<&str>) -> Option<LevelFilter> {
        select_filter(verbosity, override_directive).max_level_hint()
    }

    #[test]
    fn verbosity_raises_crate_level() {
        assert_eq!(hint(0, None), Some(LevelFilter::WARN));
        assert_eq!(hint(1, None), Some(LevelFilter::INFO));
        assert_eq!(hint(2, None), Some(LevelFilter::DEBUG));
        assert_eq!(hint(3, None), Some(LevelFilter::TRACE));
        assert_eq!(hint(255, None), Some(LevelFilter::TRACE));
    }

    #[test]
    fn env_directive_beats_verbosity() {
        assert_eq!(hint(3, Some("error")), Some(LevelFilter::ERROR));
        assert_eq!(hint(0, Some("fixturegen=debug")), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn blank_or_invalid_env_directive_ignored() {
        assert_eq!(hint(1, Some("")), Some(LevelFilter::INFO));
        assert_eq!(hint(1, Some("  ")), Some(LevelFilter::INFO));
        assert_eq!(hint(2, Some("fixturegen=loud")), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn color_choice_overrides_detection() {
        assert!(use_ansi(ColorChoice::Always));
        assert!(!use_ansi(ColorChoice::Never));
    }

    #[test]
    fn log_format_parses_from_flag_values() {
        assert_eq!(LogFormat::from_str("json", true), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_str("human", true), Ok(LogFormat::Human));
        assert!(LogFormat::from_str("xml", true).is_err());
    }
}
