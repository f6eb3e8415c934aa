//! Text generation.
//!
//! All randomness in a run flows through a [`TextSource`]. The production
//! source, [`LoremSource`], is a seeded `StdRng`, so a given seed always
//! reproduces the same fixture tree. Tests can substitute their own source.
//!
//! ```text
//! generate_paragraphs(source, 200, 2, 10)  →  Vec<String>   (the pool)
//! writer::write_content_files(.., &pool, source)            (titles, picks, coin flips)
//! ```

pub mod lorem;

use crate::error::GeneratorError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

// ============================================================================
// Core Trait
// ============================================================================

/// Supplier of every random decision made while building fixtures.
pub trait TextSource: std::fmt::Debug {
    /// Draws a sentence count from `range` (upper bound exclusive).
    fn sentence_count(&mut self, range: Range<usize>) -> usize;

    /// Produces a paragraph of exactly `sentences` sentences.
    fn paragraph(&mut self, sentences: usize) -> String;

    /// Produces a book-title-like string without `'` or newlines.
    fn title(&mut self) -> String;

    /// Picks an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

// ============================================================================
// LoremSource
// ============================================================================

/// Seeded lorem ipsum text source.
#[derive(Debug)]
pub struct LoremSource {
    seed: u64,
    rng: StdRng,
}

impl LoremSource {
    /// Creates a source from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source from `seed`, or from a freshly drawn one.
    ///
    /// The drawn seed is available through [`LoremSource::seed`] so an
    /// unseeded run can be reproduced.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(|| rand::rng().random()))
    }

    /// The seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl TextSource for LoremSource {
    fn sentence_count(&mut self, range: Range<usize>) -> usize {
        self.rng.random_range(range)
    }

    fn paragraph(&mut self, sentences: usize) -> String {
        lorem::paragraph(&mut self.rng, sentences)
    }

    fn title(&mut self) -> String {
        lorem::title(&mut self.rng)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

// ============================================================================
// Paragraph pool
// ============================================================================

/// Generates the paragraph pool for one run.
///
/// Each paragraph's sentence count is drawn from
/// `min_sentences..max_sentences`. The upper bound is exclusive: with the
/// defaults (2, 10) a paragraph has at most 9 sentences. Making it inclusive
/// changes every seeded fixture tree.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidParameters`] if the range is empty.
pub fn generate_paragraphs<S: TextSource + ?Sized>(
    source: &mut S,
    count: usize,
    min_sentences: usize,
    max_sentences: usize,
) -> Result<Vec<String>, GeneratorError> {
    if min_sentences >= max_sentences {
        return Err(GeneratorError::InvalidParameters(format!(
            "sentence range {min_sentences}..{max_sentences} is empty"
        )));
    }

    let paragraphs: Vec<String> = (0..count)
        .map(|_| {
            let sentences = source.sentence_count(min_sentences..max_sentences);
            source.paragraph(sentences)
        })
        .collect();

    tracing::debug!(
        count = paragraphs.len(),
        min_sentences,
        max_sentences,
        "generated paragraph pool"
    );
    Ok(paragraphs)
}

// ============================================================================
// Tests
// ============================================================================
