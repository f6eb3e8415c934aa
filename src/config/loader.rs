//! Configuration loader
//!
//! Loading pipeline:
//! 1. Read the YAML file (optional; defaults are used without one)
//! 2. Deserialize into `FixtureConfig`
//! 3. Apply command-line overrides
//! 4. Validate

use crate::config::schema::FixtureConfig;
use crate::config::validation::{GeneratorLimits, Validator};
use crate::error::{ConfigError, ValidationIssue};

use std::path::{Path, PathBuf};

/// Name reported in validation errors when no file was loaded.
const CLI_SOURCE: &str = "<cli>";

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,

    /// Upper bounds enforced during validation.
    pub limits: GeneratorLimits,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_config_size: env_or("FIXTUREGEN_MAX_CONFIG_SIZE", 1024 * 1024),
            limits: GeneratorLimits {
                max_paragraphs: env_or(
                    "FIXTUREGEN_MAX_PARAGRAPHS",
                    GeneratorLimits::DEFAULT_MAX_PARAGRAPHS,
                ),
                max_files: env_or("FIXTUREGEN_MAX_FILES", GeneratorLimits::DEFAULT_MAX_FILES),
                max_blocks_per_file: env_or(
                    "FIXTUREGEN_MAX_BLOCKS_PER_FILE",
                    GeneratorLimits::DEFAULT_MAX_BLOCKS_PER_FILE,
                ),
                max_sentences: env_or(
                    "FIXTUREGEN_MAX_SENTENCES",
                    GeneratorLimits::DEFAULT_MAX_SENTENCES,
                ),
            },
        }
    }
}

/// Values given on the command line. Each one that is set wins over the
/// file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// RNG seed.
    pub seed: Option<u64>,
    /// Paragraph pool size.
    pub paragraphs: Option<usize>,
    /// Number of content files.
    pub files: Option<usize>,
}

impl ConfigOverrides {
    /// Applies every set override to `config`.
    pub fn apply(&self, config: &mut FixtureConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(paragraphs) = self.paragraphs {
            config.paragraphs = paragraphs;
        }
        if let Some(files) = self.files {
            config.files = files;
        }
    }
}

/// Result of loading a configuration.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: FixtureConfig,

    /// Warnings encountered during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolves the configuration for a run.
    ///
    /// Reads `path` when given, applies `overrides` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// the merged configuration fails validation.
    pub fn resolve(
        &self,
        path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<LoadResult, ConfigError> {
        let mut config = match path {
            Some(path) => self.read(path)?,
            None => FixtureConfig::default(),
        };
        overrides.apply(&mut config);

        let source_name = path.map_or_else(|| CLI_SOURCE.to_string(), |p| p.display().to_string());
        self.finish(config, source_name)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is too large,
    /// fails to parse or fails validation.
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let config = self.read(path)?;
        self.finish(config, path.display().to_string())
    }

    /// Loads and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the YAML fails to parse or validate.
    pub fn load_from_str(&self, yaml: &str) -> Result<LoadResult, ConfigError> {
        let config = parse(yaml, Path::new(CLI_SOURCE))?;
        self.finish(config, CLI_SOURCE.to_string())
    }

    fn read(&self, path: &Path) -> Result<FixtureConfig, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.options.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.options.max_config_size),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        parse(raw, path)
    }

    fn finish(
        &self,
        config: FixtureConfig,
        source_name: String,
    ) -> Result<LoadResult, ConfigError> {
        let result = Validator::with_limits(self.options.limits).validate(&config);
        if !result.is_valid() {
            return Err(ConfigError::ValidationError {
                source_name,
                errors: result.errors,
            });
        }
        Ok(LoadResult {
            config,
            warnings: result.warnings,
        })
    }
}

fn parse(yaml: &str, path: &Path) -> Result<FixtureConfig, ConfigError> {
    // An empty document means "all defaults".
    if yaml.trim().is_empty() {
        return Ok(FixtureConfig::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
        path: PathBuf::from(path),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Parses an environment variable, falling back to `default`.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
