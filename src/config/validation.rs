//! Configuration validation
//!
//! Runs on the fully resolved `FixtureConfig`, after CLI overrides have
//! been applied. Collects every issue instead of stopping at the first.

use crate::config::schema::FixtureConfig;
use crate::error::{Severity, ValidationIssue};

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent the run).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Upper bounds on the counts a run may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorLimits {
    /// Maximum paragraph pool size.
    pub max_paragraphs: usize,

    /// Maximum number of content files.
    pub max_files: usize,

    /// Maximum body blocks per content file.
    pub max_blocks_per_file: usize,

    /// Maximum value of the exclusive sentence bound.
    pub max_sentences: usize,
}

impl GeneratorLimits {
    /// Default paragraph pool cap: 100 000
    pub const DEFAULT_MAX_PARAGRAPHS: usize = 100_000;

    /// Default content file cap: 1 000 000
    pub const DEFAULT_MAX_FILES: usize = 1_000_000;

    /// Default blocks-per-file cap: 10 000
    pub const DEFAULT_MAX_BLOCKS_PER_FILE: usize = 10_000;

    /// Default sentence bound cap: 1 000
    pub const DEFAULT_MAX_SENTENCES: usize = 1_000;
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_paragraphs: Self::DEFAULT_MAX_PARAGRAPHS,
            max_files: Self::DEFAULT_MAX_FILES,
            max_blocks_per_file: Self::DEFAULT_MAX_BLOCKS_PER_FILE,
            max_sentences: Self::DEFAULT_MAX_SENTENCES,
        }
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    limits: GeneratorLimits,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_limits(limits: GeneratorLimits) -> Self {
        Self {
            limits,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Validates a configuration and returns the result.
    pub fn validate(&mut self, config: &FixtureConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_counts(config);
        self.validate_limits(config);
        self.validate_sentence_range(config);
        self.validate_layout(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_counts(&mut self, config: &FixtureConfig) {
        if config.paragraphs == 0 && config.files > 0 && config.blocks_per_file > 0 {
            self.error("paragraphs", "must be at least 1 when files are written");
        }
        if config.page_size == 0 {
            self.error("page_size", "must be at least 1");
        }
        if config.files == 0 {
            self.warning("files", "no content files will be written");
        }
        if config.blocks_per_file == 0 {
            self.warning("blocks_per_file", "content files will have no body");
        }
    }

    fn validate_limits(&mut self, config: &FixtureConfig) {
        let limits = self.limits;
        for (field, value, max, env) in [
            (
                "paragraphs",
                config.paragraphs,
                limits.max_paragraphs,
                "FIXTUREGEN_MAX_PARAGRAPHS",
            ),
            ("files", config.files, limits.max_files, "FIXTUREGEN_MAX_FILES"),
            (
                "blocks_per_file",
                config.blocks_per_file,
                limits.max_blocks_per_file,
                "FIXTUREGEN_MAX_BLOCKS_PER_FILE",
            ),
            (
                "max_sentences",
                config.max_sentences,
                limits.max_sentences,
                "FIXTUREGEN_MAX_SENTENCES",
            ),
        ] {
            if value > max {
                self.error(
                    field,
                    &format!(
                        "too large: {value} (maximum: {max}). \
                         Set {env} to increase the limit."
                    ),
                );
            }
        }
    }

    fn validate_sentence_range(&mut self, config: &FixtureConfig) {
        if config.min_sentences == 0 {
            self.error("min_sentences", "must be at least 1");
        }
        // The upper bound is exclusive, so an empty range has no valid draw.
        if config.max_sentences <= config.min_sentences {
            self.error(
                "max_sentences",
                &format!(
                    "must be greater than min_sentences ({}), got {}",
                    config.min_sentences, config.max_sentences
                ),
            );
        }
    }

    fn validate_layout(&mut self, config: &FixtureConfig) {
        let layout = &config.layout;
        for (field, value) in [
            ("layout.content_dir", &layout.content_dir),
            ("layout.collection", &layout.collection),
            ("layout.templates_dir", &layout.templates_dir),
            ("layout.pages_dir", &layout.pages_dir),
        ] {
            if value.trim().is_empty() {
                self.error(field, "must not be empty");
            } else if value.contains(['/', '\\']) || value == ".." || value == "." {
                self.error(field, "must be a single directory name");
            }
        }
        // The collection name is embedded in a double-quoted template argument.
        if layout.collection.contains('"') {
            self.error("layout.collection", "must not contain '\"'");
        }
    }

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}
