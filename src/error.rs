//! Error types for `fixturegen`
//!
//! A small error hierarchy mapped onto process exit codes. Filesystem
//! failures carry the path that caused them.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `fixturegen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution (also used when only the usage message is shown)
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, disk full, invalid path)
    pub const IO_ERROR: i32 = 3;

    /// Generator error (empty paragraph pool)
    pub const GENERATOR_ERROR: i32 = 10;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `fixturegen` operations.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Text generation error
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Directory creation or file write failure
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixtureError {
    /// Wraps an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Generator(_) => ExitCode::GENERATOR_ERROR,
            Self::Io { .. } => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Referenced configuration file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {source_name}: {}", join_issues(.errors))]
    ValidationError {
        /// Config file path, or `<cli>` when no file was given
        source_name: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "layout.collection")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the configuration from being used
    Error,
    /// Reported but does not stop the run
    Warning,
}

// ============================================================================
// Generator Errors
// ============================================================================

/// Text generation errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Content files need at least one paragraph to draw from
    #[error("paragraph pool is empty")]
    EmptyPool,

    /// Invalid generator parameters
    #[error("invalid generator parameters: {0}")]
    InvalidParameters(String),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `fixturegen` operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

// ============================================================================
// Tests
// ============================================================================
