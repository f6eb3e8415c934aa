//! Command handler.
//!
//! Without an output path the usage message is printed and nothing is
//! written. Otherwise the configuration is resolved and one run executes.

use crate::cli::args::Cli;
use crate::config::ConfigLoader;
use crate::error::Result;
use crate::fixture::{FixtureGenerator, RunSummary};

/// Printed to stdout when no output path is given.
pub const USAGE: &str = concat!(
    "usage: fixturegen [OPTIONS] <OUTPUT_PATH>\n",
    "       writes content/items/*.md, templates/pagination_template.html and ",
    "pages/paged_content.html under OUTPUT_PATH\n",
);

/// Runs the command described by `cli`.
///
/// Returns `None` when only the usage message was shown.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any fixture file
/// cannot be written.
pub fn run(cli: &Cli) -> Result<Option<RunSummary>> {
    let Some(output_path) = cli.output_path.as_deref() else {
        print!("{USAGE}");
        return Ok(None);
    };

    let loaded = ConfigLoader::with_defaults().resolve(cli.config.as_deref(), cli.overrides())?;
    for warning in &loaded.warnings {
        tracing::warn!(%warning, "configuration");
    }

    let summary = FixtureGenerator::new(loaded.config)
        .with_site_config(cli.emit_site_config)
        .run(output_path)?;
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn usage_has_two_lines() {
        assert_eq!(USAGE.lines().count(), 2);
        assert!(USAGE.starts_with("usage: "));
    }

    #[test]
    fn no_output_path_writes_nothing() {
        let cli = Cli::try_parse_from(["fixturegen"]).unwrap();
        assert_eq!(run(&cli).unwrap(), None);
    }

    #[test]
    fn runs_with_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let cli = Cli::try_parse_from([
            "fixturegen",
            out.to_str().unwrap(),
            "--seed",
            "8",
            "--files",
            "4",
            "--paragraphs",
            "6",
        ])
        .unwrap();
        let summary = run(&cli).unwrap().unwrap();
        assert_eq!(summary.seed, Some(8));
        assert_eq!(summary.content_files, 4);
        assert_eq!(summary.paragraphs, 6);
    }

    #[test]
    fn invalid_override_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "fixturegen",
            tmp.path().to_str().unwrap(),
            "--paragraphs",
            "0",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::CONFIG_ERROR);
        assert!(!tmp.path().join("content").exists());
    }

    #[test]
    fn huge_file_count_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "fixturegen",
            tmp.path().to_str().unwrap(),
            "--files",
            "18446744073709551615",
            "--paragraphs",
            "3",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::CONFIG_ERROR);
        assert!(err.to_string().contains("files"), "{err}");
        assert!(!tmp.path().join("content").exists());
    }
}
