//! Configuration schema.
//!
//! Every count used while generating a fixture tree lives here with its
//! documented default. A YAML file may set any subset of the fields.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the pagination partial written under the templates directory.
pub const PAGINATION_TEMPLATE_FILE: &str = "pagination_template.html";

/// File name of the paged page written under the pages directory.
pub const PAGED_CONTENT_FILE: &str = "paged_content.html";

/// File name of the optional downstream site configuration.
pub const SITE_CONFIG_FILE: &str = "config.json";

/// Settings for one fixture generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Size of the paragraph pool (default: 200)
    #[serde(default = "FixtureConfig::default_paragraphs")]
    pub paragraphs: usize,

    /// Number of content files to write (default: 350)
    #[serde(default = "FixtureConfig::default_files")]
    pub files: usize,

    /// Body blocks per content file (default: 10)
    #[serde(default = "FixtureConfig::default_blocks_per_file")]
    pub blocks_per_file: usize,

    /// Inclusive lower bound on sentences per paragraph (default: 2)
    #[serde(default = "FixtureConfig::default_min_sentences")]
    pub min_sentences: usize,

    /// Exclusive upper bound on sentences per paragraph (default: 10)
    #[serde(default = "FixtureConfig::default_max_sentences")]
    pub max_sentences: usize,

    /// Page size passed to `paginate` in the paged page (default: 10)
    #[serde(default = "FixtureConfig::default_page_size")]
    pub page_size: usize,

    /// RNG seed. A fresh seed is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output directory names.
    #[serde(default)]
    pub layout: Layout,
}

impl FixtureConfig {
    /// Default paragraph pool size: 200
    pub const DEFAULT_PARAGRAPHS: usize = 200;

    /// Default number of content files: 350
    pub const DEFAULT_FILES: usize = 350;

    /// Default body blocks per content file: 10
    pub const DEFAULT_BLOCKS_PER_FILE: usize = 10;

    /// Default minimum sentences per paragraph: 2
    pub const DEFAULT_MIN_SENTENCES: usize = 2;

    /// Default (exclusive) maximum sentences per paragraph: 10
    pub const DEFAULT_MAX_SENTENCES: usize = 10;

    /// Default page size: 10
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    const fn default_paragraphs() -> usize {
        Self::DEFAULT_PARAGRAPHS
    }

    const fn default_files() -> usize {
        Self::DEFAULT_FILES
    }

    const fn default_blocks_per_file() -> usize {
        Self::DEFAULT_BLOCKS_PER_FILE
    }

    const fn default_min_sentences() -> usize {
        Self::DEFAULT_MIN_SENTENCES
    }

    const fn default_max_sentences() -> usize {
        Self::DEFAULT_MAX_SENTENCES
    }

    const fn default_page_size() -> usize {
        Self::DEFAULT_PAGE_SIZE
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            paragraphs: Self::DEFAULT_PARAGRAPHS,
            files: Self::DEFAULT_FILES,
            blocks_per_file: Self::DEFAULT_BLOCKS_PER_FILE,
            min_sentences: Self::DEFAULT_MIN_SENTENCES,
            max_sentences: Self::DEFAULT_MAX_SENTENCES,
            page_size: Self::DEFAULT_PAGE_SIZE,
            seed: None,
            layout: Layout::default(),
        }
    }
}

/// Directory names of the generated tree.
///
/// Defaults match what the downstream tool expects when its own
/// configuration leaves the directories unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Content root (default: `content`)
    pub content_dir: String,

    /// Collection directory inside the content root (default: `items`)
    pub collection: String,

    /// Templates directory (default: `templates`)
    pub templates_dir: String,

    /// Pages directory (default: `pages`)
    pub pages_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            collection: "items".to_string(),
            templates_dir: "templates".to_string(),
            pages_dir: "pages".to_string(),
        }
    }
}

impl Layout {
    /// `<root>/<content_dir>/<collection>`
    #[must_use]
    pub fn collection_path(&self, root: &Path) -> PathBuf {
        root.join(&self.content_dir).join(&self.collection)
    }

    /// `<root>/<templates_dir>`
    #[must_use]
    pub fn templates_path(&self, root: &Path) -> PathBuf {
        root.join(&self.templates_dir)
    }

    /// `<root>/<pages_dir>`
    #[must_use]
    pub fn pages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.pages_dir)
    }
}
