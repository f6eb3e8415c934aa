//! `fixturegen` - synthetic fixture generator for templating tools
//!
//! Builds a tree of markdown content files, a pagination partial and a
//! paged HTML page that exercise a templating tool's `paginate` support.
//! All randomness comes from one seeded [`generator::TextSource`].

pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod observability;
pub mod writer;
