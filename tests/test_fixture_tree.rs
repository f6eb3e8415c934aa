mod common;

use common::{EXPECTED_PAGE, EXPECTED_TEMPLATE, FixtureGenProcess, file_names};

// ============================================================================
// default run
// ============================================================================

#[test]
fn default_run_writes_full_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let output = FixtureGenProcess::generate(tmp.path(), &[]);
    assert!(
        output.stdout.is_empty(),
        "successful run should print nothing: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let items = tmp.path().join("content/items");
    let mut expected: Vec<String> = (1..=350).map(|i| format!("test_content_{i}.md")).collect();
    expected.sort();
    assert_eq!(file_names(&items), expected);

    assert_eq!(
        file_names(&tmp.path().join("templates")),
        vec!["pagination_template.html"]
    );
    assert_eq!(
        file_names(&tmp.path().join("pages")),
        vec!["paged_content.html"]
    );
    assert!(!tmp.path().join("config.json").exists());
}

#[test]
fn content_files_have_twelve_lines() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--seed", "17"]);

    for i in 1..=350 {
        let path = tmp.path().join(format!("content/items/test_content_{i}.md"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12, "{}", path.display());

        assert!(lines[0].starts_with("{{ title = '"), "{}", lines[0]);
        assert!(lines[0].ends_with("' }}"), "{}", lines[0]);
        assert_eq!(lines[1], "# {{: title}}");

        for line in &lines[2..] {
            let bold = line.len() > 4 && line.starts_with("**") && line.ends_with("**");
            let underline = line.len() > 4 && line.starts_with("__") && line.ends_with("__");
            assert!(bold ^ underline, "bad body line in {}: {line}", path.display());
        }
    }
}

#[test]
fn both_emphasis_styles_appear() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--seed", "3", "--files", "20"]);

    let mut bold = 0;
    let mut underline = 0;
    for i in 1..=20 {
        let path = tmp.path().join(format!("content/items/test_content_{i}.md"));
        for line in std::fs::read_to_string(path).unwrap().lines().skip(2) {
            if line.starts_with("**") {
                bold += 1;
            } else {
                underline += 1;
            }
        }
    }
    assert_eq!(bold + underline, 200);
    assert!(bold > 0 && underline > 0, "bold={bold} underline={underline}");
}

#[test]
fn paragraphs_have_at_most_nine_sentences() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--seed", "99", "--files", "50"]);

    for i in 1..=50 {
        let path = tmp.path().join(format!("content/items/test_content_{i}.md"));
        for line in std::fs::read_to_string(path).unwrap().lines().skip(2) {
            let sentences = line.matches('.').count();
            assert!((2..10).contains(&sentences), "{sentences} sentences: {line}");
        }
    }
}

#[test]
fn static_files_are_exact() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--files", "1"]);

    let template =
        std::fs::read_to_string(tmp.path().join("templates/pagination_template.html")).unwrap();
    assert_eq!(template, EXPECTED_TEMPLATE);

    let page = std::fs::read_to_string(tmp.path().join("pages/paged_content.html")).unwrap();
    assert_eq!(page, EXPECTED_PAGE);
}

// ============================================================================
// repeat runs
// ============================================================================

#[test]
fn second_run_overwrites() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--seed", "1"]);
    let first =
        std::fs::read_to_string(tmp.path().join("content/items/test_content_1.md")).unwrap();

    FixtureGenProcess::generate(tmp.path(), &["--seed", "2"]);
    let second =
        std::fs::read_to_string(tmp.path().join("content/items/test_content_1.md")).unwrap();

    assert_ne!(first, second);
    assert_eq!(file_names(&tmp.path().join("content/items")).len(), 350);
    assert_eq!(file_names(&tmp.path().join("templates")).len(), 1);
    assert_eq!(file_names(&tmp.path().join("pages")).len(), 1);
}

#[test]
fn same_seed_is_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(a.path(), &["--seed", "2024", "--files", "30"]);
    FixtureGenProcess::generate(b.path(), &["--seed", "2024", "--files", "30"]);

    for i in 1..=30 {
        let rel = format!("content/items/test_content_{i}.md");
        assert_eq!(
            std::fs::read(a.path().join(&rel)).unwrap(),
            std::fs::read(b.path().join(&rel)).unwrap(),
            "{rel} differs"
        );
    }
}

// ============================================================================
// configuration file
// ============================================================================

#[test]
fn config_file_controls_layout_and_counts() {
    let tmp = tempfile::tempdir().unwrap();
    let config = FixtureGenProcess::fixture_path("small.yaml");
    FixtureGenProcess::generate(tmp.path(), &["--config", config.to_str().unwrap()]);

    assert_eq!(file_names(&tmp.path().join("content/posts")).len(), 12);
    assert!(!tmp.path().join("content/items").exists());

    let page = std::fs::read_to_string(tmp.path().join("pages/paged_content.html")).unwrap();
    assert!(page.starts_with("{{: paginate(\"posts\", \"pagination_template.html\", 5) }}\n"));
}

#[test]
fn cli_flag_overrides_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = FixtureGenProcess::fixture_path("small.yaml");
    FixtureGenProcess::generate(
        tmp.path(),
        &["--config", config.to_str().unwrap(), "--files", "3"],
    );
    assert_eq!(file_names(&tmp.path().join("content/posts")).len(), 3);
}

#[test]
fn site_config_written_on_request() {
    let tmp = tempfile::tempdir().unwrap();
    FixtureGenProcess::generate(tmp.path(), &["--files", "1", "--emit-site-config"]);

    let text = std::fs::read_to_string(tmp.path().join("config.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(parsed["ContentDir"], "content");
    assert_eq!(parsed["PagesDir"], "pages");
    assert_eq!(parsed["TemplateDir"], "templates");
    assert_eq!(parsed["RootPath"], tmp.path().to_str().unwrap());
}
