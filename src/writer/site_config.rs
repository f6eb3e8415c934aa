//! Site configuration for the downstream templating tool.
//!
//! The tool reads a JSON file with PascalCase keys. Directory fields are
//! relative to `RootPath`.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Layout;
use crate::config::schema::SITE_CONFIG_FILE;
use crate::error::Result;

use super::write_file;

/// Directory rendered output goes to, relative to the root.
const OUTPUT_DIR: &str = "public";

/// The downstream tool's configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfig {
    /// Project root.
    pub root_path: PathBuf,
    /// Content directory name.
    pub content_dir: String,
    /// Pages directory name.
    pub pages_dir: String,
    /// Where the tool writes rendered pages.
    pub output_path: PathBuf,
    /// Templates directory name.
    pub template_dir: String,
}

impl SiteConfig {
    /// Describes a fixture tree rooted at `root`.
    #[must_use]
    pub fn for_tree(root: &Path, layout: &Layout) -> Self {
        Self {
            root_path: root.to_path_buf(),
            content_dir: layout.content_dir.clone(),
            pages_dir: layout.pages_dir.clone(),
            output_path: root.join(OUTPUT_DIR),
            template_dir: layout.templates_dir.clone(),
        }
    }
}

/// Writes `config.json` at `root`. The root must already exist.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_site_config(root: &Path, layout: &Layout) -> Result<PathBuf> {
    let path = root.join(SITE_CONFIG_FILE);
    let mut json = serde_json::to_string_pretty(&SiteConfig::for_tree(root, layout))?;
    json.push('\n');
    write_file(&path, |out| out.write_all(json.as_bytes()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_pascal_case_keys() {
        let site = SiteConfig::for_tree(Path::new("/fixtures"), &Layout::default());
        let value = serde_json::to_value(&site).unwrap();
        assert_eq!(value["RootPath"], "/fixtures");
        assert_eq!(value["ContentDir"], "content");
        assert_eq!(value["PagesDir"], "pages");
        assert_eq!(value["TemplateDir"], "templates");
        assert_eq!(value["OutputPath"], "/fixtures/public");
    }

    #[test]
    fn written_file_parses_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_site_config(tmp.path(), &Layout::default()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, SiteConfig::for_tree(tmp.path(), &Layout::default()));
    }
}
