// tests/integration_tests/common.rs
use anyhow::Result;
use codepack::{DataRule, ProjectConfig};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, ".gitignore", &content)
}

/// The small mixed project used across the scan tests:
///
/// ```text
/// src/main.code
/// data/users.json
/// README.md
/// .ignore          (build/)
/// build/tmp.code
/// ```
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "src/main.code", "print hello")?;
    create_test_file(temp_dir.path(), "data/users.json", "[{\"id\": 1}]")?;
    create_test_file(temp_dir.path(), "README.md", "# Demo\n")?;
    create_test_file(temp_dir.path(), ".ignore", "build/\n")?;
    create_test_file(temp_dir.path(), "build/tmp.code", "stale")?;

    Ok(temp_dir)
}

pub fn test_config(root: &Path) -> ProjectConfig {
    ProjectConfig {
        code_extensions: vec![String::from("code"), String::from("dart")],
        data_rules: vec![
            DataRule::Extension(String::from("json")),
            DataRule::Directory(String::from("data")),
        ],
        ..ProjectConfig::new(root.to_path_buf())
    }
}

pub fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|s| (*s).to_owned()).collect()
}
