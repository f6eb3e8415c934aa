//! Observability
//!
//! Structured logging to stderr. Stdout is left to the usage message.

pub mod logging;

pub use logging::{LogFormat, init_from_cli, init_logging};
