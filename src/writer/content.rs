//! Markdown content files.
//!
//! Each file is a title directive, a heading directive that echoes the
//! title, and a run of body blocks:
//!
//! ```text
//! {{ title = 'The Hidden Orchard' }}
//! # {{: title}}
//! **Sed quia dolor amet. Enim ad minima veniam.**
//! __Ipsum dolor sit amet consectetur.__
//! ...
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::FixtureConfig;
use crate::error::{GeneratorError, Result};
use crate::generator::TextSource;

use super::{ensure_dir, write_file};

/// Markdown emphasis wrapped around one body block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `**text**`
    Bold,
    /// `__text__`
    Underline,
}

impl Emphasis {
    /// Maps a coin flip onto an emphasis: heads is bold.
    #[must_use]
    pub const fn from_coin(heads: bool) -> Self {
        if heads { Self::Bold } else { Self::Underline }
    }

    /// The delimiter placed on both sides of the block.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Underline => "__",
        }
    }
}

/// File name of the content file with 1-based index `index`.
#[must_use]
pub fn content_file_name(index: usize) -> String {
    format!("test_content_{index}.md")
}

/// Renders one content file into `out`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn render_content_file<'a, W, I>(out: &mut W, title: &str, blocks: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, Emphasis)>,
{
    writeln!(out, "{{{{ title = '{title}' }}}}")?;
    writeln!(out, "# {{{{: title}}}}")?;
    for (paragraph, emphasis) in blocks {
        let d = emphasis.delimiter();
        writeln!(out, "{d}{paragraph}{d}")?;
    }
    Ok(())
}

/// Writes `config.files` content files into the collection directory.
///
/// Blocks are drawn from `paragraphs` uniformly with replacement, and each
/// block gets its own coin flip for bold or underline. Returns the paths
/// written, in index order.
///
/// # Errors
///
/// Returns [`GeneratorError::EmptyPool`] if there are blocks to fill and
/// no paragraphs, or an I/O error for the first directory or file that
/// cannot be written.
pub fn write_content_files<S: TextSource + ?Sized>(
    root: &Path,
    config: &FixtureConfig,
    paragraphs: &[String],
    source: &mut S,
) -> Result<Vec<PathBuf>> {
    if paragraphs.is_empty() && config.files > 0 && config.blocks_per_file > 0 {
        return Err(GeneratorError::EmptyPool.into());
    }

    let dir = config.layout.collection_path(root);
    ensure_dir(&dir)?;

    let mut written = Vec::new();
    for index in 1..=config.files {
        let path = dir.join(content_file_name(index));

        // Draw everything before opening the file so the draw order does
        // not depend on I/O.
        let title = source.title();
        let mut blocks: Vec<(&str, Emphasis)> = Vec::new();
        for _ in 0..config.blocks_per_file {
            let paragraph = paragraphs[source.pick(paragraphs.len())].as_str();
            blocks.push((paragraph, Emphasis::from_coin(source.coin())));
        }

        write_file(&path, |out| render_content_file(out, &title, blocks))?;
        written.push(path);
    }

    tracing::debug!(dir = %dir.display(), files = written.len(), "wrote content files");
    Ok(written)
}
