//! Configuration
//!
//! Typed schema, YAML loading with command-line overrides, and validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLoader, ConfigOverrides, LoadResult, LoaderOptions};
pub use schema::{FixtureConfig, Layout};
pub use validation::{GeneratorLimits, ValidationResult, Validator};
