//! Shared integration-test harness for running the `fixturegen` binary
//! and inspecting the tree it writes.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers around the compiled `fixturegen` binary.
pub struct FixtureGenProcess;

impl FixtureGenProcess {
    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::spawn_command_with_env(args, &[])
    }

    /// Runs the binary with `args` and only the given `FIXTUREGEN_*`
    /// variables set. Any inherited from the caller are removed.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_fixturegen"));
        command.args(args).env_remove("NO_COLOR");
        for (name, _) in std::env::vars_os() {
            if name.to_string_lossy().starts_with("FIXTUREGEN_") {
                command.env_remove(name);
            }
        }
        command.envs(env.iter().copied());
        command.output().expect("failed to run fixturegen")
    }

    /// Runs the binary against `out` with extra arguments, asserting success.
    #[allow(clippy::missing_panics_doc)]
    pub fn generate(out: &Path, extra: &[&str]) -> Output {
        let mut args = vec![out.to_str().expect("non-UTF-8 output path")];
        args.extend_from_slice(extra);
        let output = Self::spawn_command(&args);
        assert!(
            output.status.success(),
            "fixturegen failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Returns the path to a test fixture file.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Sorted file names in `dir`.
#[allow(clippy::missing_panics_doc)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read_dir failed")
        .map(|e| e.expect("bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Expected `paged_content.html` for the default configuration.
pub const EXPECTED_PAGE: &str = r#"{{: paginate("items", "pagination_template.html", 10) }}
The cur page is: {{: curPage }}
{{for prevPage in pagesBefore(3)}}
<p>Before</p>
<a href="{{: prevPage._pageHref }}">{{: prevPage._pageNum }}</a>
{{end}}
<strong>{{: curPage }}</strong>
{{for nextPage in pagesAfter(3)}}
<p>After</p>
<a href="{{: nextPage._pageHref }}">{{: nextPage._pageNum }}</a>
{{end}}
"#;

/// Expected `pagination_template.html`.
pub const EXPECTED_TEMPLATE: &str = "<p>The current page is {{: curPage }}</p>\n{{for item in content}}\n<div>{{: item._href }}</div>\n{{end}}";
