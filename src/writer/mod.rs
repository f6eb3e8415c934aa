//! Fixture file writers.
//!
//! Every writer creates its directory first (idempotent) and overwrites
//! files it finds in the way. Failures abort immediately; files written
//! before the failure are left in place.
//!
//! | Writer | Output |
//! |--------|--------|
//! | [`write_content_files`] | `<content_dir>/<collection>/test_content_<i>.md` |
//! | [`write_pagination_template`] | `<templates_dir>/pagination_template.html` |
//! | [`write_page_files`] | `<pages_dir>/paged_content.html` |
//! | [`write_site_config`] | `config.json` |

mod content;
mod site_config;
mod templates;

pub use content::{Emphasis, content_file_name, render_content_file, write_content_files};
pub use site_config::{SiteConfig, write_site_config};
pub use templates::{
    PAGINATION_TEMPLATE, render_paged_content, write_content_pagination_page, write_page_files,
    write_pagination_template,
};

use crate::error::{FixtureError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "creating directory");
    }
    std::fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))
}

/// Creates or truncates `path` and hands a buffered writer to `body`.
///
/// The file is flushed before returning so write errors surface here
/// rather than on drop.
pub(crate) fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| FixtureError::io(path, e))?;
    let mut out = BufWriter::new(file);
    body(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| FixtureError::io(path, e))?;
    tracing::trace!(path = %path.display(), "wrote file");
    Ok(())
}
