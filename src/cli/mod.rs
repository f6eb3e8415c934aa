//! Command-line interface
//!
//! Argument definitions and the single command this binary runs.

pub mod args;
pub mod run;
