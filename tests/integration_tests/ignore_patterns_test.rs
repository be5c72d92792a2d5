// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, setup_test_directory, test_config};
use anyhow::Result;
use codepack::PatternMatcher;

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_ignore_file(
        temp_dir.path(),
        &[
            "# Comment line",
            "*.tmp",
            "draft/",
            "!draft/important.md",
            "*.{log,cache}",
            "node_modules/",
            "/absolute_path.md",
            "build/**/*.js",
            "\\#hash.txt",
        ],
    )?;

    let mut warnings = Vec::new();
    let mut patterns = PatternMatcher::new(&test_config(temp_dir.path()), &mut warnings);
    patterns.enter_directory(temp_dir.path(), "", &mut warnings);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    assert!(patterns.matches("test.tmp", false), "Should match *.tmp pattern");
    assert!(
        patterns.matches("draft/test.md", false),
        "Should match draft/ pattern"
    );
    assert!(
        patterns.matches("draft/important.md", false),
        "An excluded directory cannot be re-included from inside"
    );
    assert!(!patterns.matches("test.md", false));
    assert!(patterns.matches("test.log", false), "Should expand braces");
    assert!(patterns.matches("a/b/test.cache", false), "Should expand braces");
    assert!(patterns.matches("node_modules/package.json", false));
    assert!(patterns.matches("build/src/main.js", false), "Should match globstar");
    assert!(!patterns.matches("build.js", false));
    assert!(patterns.matches("absolute_path.md", false));
    assert!(
        !patterns.matches("sub/absolute_path.md", false),
        "Leading slash anchors to the ignore file's directory"
    );
    assert!(patterns.matches("#hash.txt", false), "Escaped hash is literal");
    assert!(patterns.matches(".git", true), "Default excludes apply");
    Ok(())
}

#[test]
fn test_ignore_files_can_be_disabled() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut config = test_config(temp_dir.path());
    config.respect_ignore_files = false;

    let mut warnings = Vec::new();
    let mut patterns = PatternMatcher::new(&config, &mut warnings);
    patterns.enter_directory(temp_dir.path(), "", &mut warnings);

    assert!(!patterns.reads_ignore_files());
    assert_eq!(patterns.layer_count(), 0);
    assert!(!patterns.matches("build", true));
    Ok(())
}
