//! One fixture generation run.
//!
//! Strictly sequential: paragraph pool, content files, pagination
//! template, pages, and optionally the site config. One [`TextSource`]
//! drives every random decision, in that order.

use std::path::Path;

use crate::config::FixtureConfig;
use crate::error::Result;
use crate::generator::{LoremSource, TextSource, generate_paragraphs};
use crate::writer;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed the run used, when known.
    pub seed: Option<u64>,
    /// Size of the paragraph pool.
    pub paragraphs: usize,
    /// Content files written.
    pub content_files: usize,
    /// Template files written.
    pub template_files: usize,
    /// Page files written.
    pub page_files: usize,
    /// Whether `config.json` was written.
    pub site_config: bool,
}

/// Generates a fixture tree from a validated configuration.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    config: FixtureConfig,
    emit_site_config: bool,
}

impl FixtureGenerator {
    /// Creates a generator. `config` should already be validated.
    #[must_use]
    pub const fn new(config: FixtureConfig) -> Self {
        Self {
            config,
            emit_site_config: false,
        }
    }

    /// Also write the downstream tool's `config.json` at the root.
    #[must_use]
    pub fn with_site_config(mut self, emit: bool) -> Self {
        self.emit_site_config = emit;
        self
    }

    /// Runs with a [`LoremSource`] seeded from the configuration.
    ///
    /// # Errors
    ///
    /// See [`FixtureGenerator::run_with`].
    pub fn run(&self, root: &Path) -> Result<RunSummary> {
        let mut source = LoremSource::from_optional_seed(self.config.seed);
        let seed = source.seed();
        if self.config.seed.is_none() {
            tracing::warn!(seed, "no seed configured, pass --seed {seed} to reproduce this run");
        }
        tracing::info!(seed, "generating fixtures");

        let mut summary = self.run_with(root, &mut source)?;
        summary.seed = Some(seed);
        Ok(summary)
    }

    /// Runs with a caller-supplied text source.
    ///
    /// # Errors
    ///
    /// Returns the first generator or I/O error. Files written before the
    /// failure stay on disk.
    pub fn run_with<S: TextSource + ?Sized>(
        &self,
        root: &Path,
        source: &mut S,
    ) -> Result<RunSummary> {
        let config = &self.config;
        tracing::debug!(root = %root.display(), ?config, "starting run");

        let paragraphs = generate_paragraphs(
            source,
            config.paragraphs,
            config.min_sentences,
            config.max_sentences,
        )?;

        let content = writer::write_content_files(root, config, &paragraphs, source)?;
        writer::write_pagination_template(root, config)?;
        let pages = writer::write_page_files(root, config)?;

        if self.emit_site_config {
            writer::write_site_config(root, &config.layout)?;
        }

        let summary = RunSummary {
            seed: None,
            paragraphs: paragraphs.len(),
            content_files: content.len(),
            template_files: 1,
            page_files: pages.len(),
            site_config: self.emit_site_config,
        };
        tracing::info!(
            content_files = summary.content_files,
            page_files = summary.page_files,
            root = %root.display(),
            "fixtures written"
        );
        Ok(summary)
    }
}
