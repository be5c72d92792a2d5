// tests/integration_tests/scanning_test.rs
use super::common::{create_ignore_file, create_test_file, set, setup_test_directory, test_config};
use anyhow::Result;
use codepack::{Category, ProjectConfig, ScanWarning, category_sizes, scan};
use tempfile::TempDir;

#[test]
fn test_reference_project() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert_eq!(result.code, set(&["src/main.code"]));
    assert_eq!(result.data, set(&["data/users.json"]));
    assert_eq!(result.locals, set(&["README.md", ".ignore"]));
    assert_eq!(result.total, 4);
    assert!(result.excluded_total() >= 1, "build/ must count as excluded");
    assert_eq!(result.total, result.classified() + result.excluded);
    assert!(result.warnings.is_empty());
    Ok(())
}

#[test]
fn test_category_sizes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    let sizes = category_sizes(temp_dir.path(), &result)?;

    assert_eq!(sizes.code, 11);
    assert_eq!(sizes.data, 11);
    assert_eq!(sizes.locals, 14);
    assert_eq!(sizes.total(), 36);
    Ok(())
}

#[test]
fn test_deleted_file_counts_as_zero_bytes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;
    std::fs::remove_file(temp_dir.path().join("src/main.code"))?;

    let sizes = category_sizes(temp_dir.path(), &result)?;

    assert_eq!(sizes.code, 0);
    assert_eq!(sizes.data, 11);
    Ok(())
}

#[test]
fn test_deeper_ignore_file_wins() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_ignore_file(temp_dir.path(), &["*.log"])?;
    create_ignore_file(&temp_dir.path().join("logs"), &["!keep.log"])?;
    create_test_file(temp_dir.path(), "root.log", "x")?;
    create_test_file(temp_dir.path(), "logs/keep.log", "x")?;
    create_test_file(temp_dir.path(), "logs/drop.log", "x")?;
    create_test_file(temp_dir.path(), "other/keep.log", "x")?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert_eq!(result.category_of("logs/keep.log"), Some(Category::Locals));
    assert_eq!(result.category_of("root.log"), None);
    assert_eq!(result.category_of("logs/drop.log"), None);
    assert_eq!(
        result.category_of("other/keep.log"),
        None,
        "negation applies only below its own directory"
    );
    assert_eq!(result.excluded, 3);
    Ok(())
}

#[test]
fn test_later_ignore_file_in_same_directory_wins() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), ".gitignore", "*.txt\n")?;
    create_test_file(temp_dir.path(), ".ignore", "!notes.txt\n")?;
    create_test_file(temp_dir.path(), "notes.txt", "n")?;
    create_test_file(temp_dir.path(), "scratch.txt", "s")?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert!(result.locals.contains("notes.txt"));
    assert!(!result.locals.contains("scratch.txt"));
    Ok(())
}

#[test]
fn test_anchored_and_directory_only_patterns() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_ignore_file(temp_dir.path(), &["/top.txt", "cache/"])?;
    create_test_file(temp_dir.path(), "top.txt", "x")?;
    create_test_file(temp_dir.path(), "nested/top.txt", "x")?;
    create_test_file(temp_dir.path(), "cache/blob.bin", "x")?;
    create_test_file(temp_dir.path(), "nested/cache", "plain file")?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert!(!result.locals.contains("top.txt"));
    assert!(result.locals.contains("nested/top.txt"));
    assert!(!result.locals.contains("cache/blob.bin"));
    assert!(result.locals.contains("nested/cache"));
    assert_eq!(result.pruned, 1);
    Ok(())
}

#[test]
fn test_include_patterns_restrict_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = ProjectConfig {
        include: vec![String::from("*.code"), String::from("*.json")],
        ..test_config(temp_dir.path())
    };

    let result = scan(temp_dir.path(), &config)?;

    assert_eq!(result.code, set(&["src/main.code"]));
    assert_eq!(result.data, set(&["data/users.json"]));
    assert!(result.locals.is_empty());
    assert_eq!(result.excluded, 2);
    Ok(())
}

#[test]
fn test_config_excludes_cannot_be_overridden() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["!README.md"])?;
    let config = ProjectConfig {
        exclude: vec![String::from("README.md")],
        ..test_config(temp_dir.path())
    };

    let result = scan(temp_dir.path(), &config)?;

    assert_eq!(result.category_of("README.md"), None);
    Ok(())
}

#[test]
fn test_bad_pattern_becomes_warning() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["[unclosed", "*.md"])?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert!(!result.locals.contains("README.md"));
    assert!(result.warnings.iter().any(|w| matches!(
        w,
        ScanWarning::PatternCompile { source, line: 1, .. } if source == ".gitignore"
    )));
    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let result = scan(temp_dir.path(), &test_config(temp_dir.path()))?;

    assert_eq!(result.total, 0);
    assert_eq!(result.classified(), 0);
    assert_eq!(result.excluded_total(), 0);
    Ok(())
}
