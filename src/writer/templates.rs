//! Pagination partial and paged page.
//!
//! Both files have fixed content. The page invokes the downstream tool's
//! `paginate` function over the content collection using the partial.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::FixtureConfig;
use crate::config::schema::{PAGED_CONTENT_FILE, PAGINATION_TEMPLATE_FILE};
use crate::error::Result;

use super::{ensure_dir, write_file};

/// Contents of `pagination_template.html`. No trailing newline.
pub const PAGINATION_TEMPLATE: &str = "<p>The current page is {{: curPage }}</p>\n\
{{for item in content}}\n\
<div>{{: item._href }}</div>\n\
{{end}}";

/// Renders `paged_content.html` for a collection and page size.
#[must_use]
pub fn render_paged_content(collection: &str, page_size: usize) -> String {
    let mut page = format!(
        "{{{{: paginate(\"{collection}\", \"{PAGINATION_TEMPLATE_FILE}\", {page_size}) }}}}\n"
    );
    page.push_str(
        "The cur page is: {{: curPage }}\n\
{{for prevPage in pagesBefore(3)}}\n\
<p>Before</p>\n\
<a href=\"{{: prevPage._pageHref }}\">{{: prevPage._pageNum }}</a>\n\
{{end}}\n\
<strong>{{: curPage }}</strong>\n\
{{for nextPage in pagesAfter(3)}}\n\
<p>After</p>\n\
<a href=\"{{: nextPage._pageHref }}\">{{: nextPage._pageNum }}</a>\n\
{{end}}\n",
    );
    page
}

/// Writes `pagination_template.html` into the templates directory.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn write_pagination_template(root: &Path, config: &FixtureConfig) -> Result<PathBuf> {
    let dir = config.layout.templates_path(root);
    ensure_dir(&dir)?;

    let path = dir.join(PAGINATION_TEMPLATE_FILE);
    write_file(&path, |out| out.write_all(PAGINATION_TEMPLATE.as_bytes()))?;
    Ok(path)
}

/// Creates the pages directory and writes every page into it.
///
/// # Errors
///
/// Returns an I/O error if the directory or a page cannot be written.
pub fn write_page_files(root: &Path, config: &FixtureConfig) -> Result<Vec<PathBuf>> {
    let dir = config.layout.pages_path(root);
    ensure_dir(&dir)?;

    Ok(vec![write_content_pagination_page(&dir, config)?])
}

/// Writes `paged_content.html` into `pages_dir`, which must exist.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_content_pagination_page(pages_dir: &Path, config: &FixtureConfig) -> Result<PathBuf> {
    let path = pages_dir.join(PAGED_CONTENT_FILE);
    let page = render_paged_content(&config.layout.collection, config.page_size);
    write_file(&path, |out| out.write_all(page.as_bytes()))?;
    Ok(path)
}
