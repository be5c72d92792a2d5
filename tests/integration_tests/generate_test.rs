// tests/integration_tests/generate_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use codepack::cli::generate_docs;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = "\
project_path: .
project_name: demo
code_extensions: [code]
data:
  extensions: [json]
";

#[test]
fn test_generate_writes_three_documents() -> Result<()> {
    let project = setup_test_directory()?;
    create_test_file(project.path(), "config.codepack.yaml", CONFIG)?;
    let output = TempDir::new()?;
    let output_dir = output.path().join("docs/packed");

    generate_docs(None, project.path(), &output_dir)?;

    let code = fs::read_to_string(output_dir.join("project-code.md"))?;
    assert!(code.starts_with("# Project Code Files\n"));
    assert!(code.contains("**Project:** demo  \n"));
    assert!(code.contains("### `src/main.code`"));
    assert!(code.contains("print hello"));
    assert!(!code.contains("build/tmp.code"));

    let data = fs::read_to_string(output_dir.join("project-data.md"))?;
    assert!(data.contains("| `data/users.json` | 11 B |"));

    let locals = fs::read_to_string(output_dir.join("project-locals.md"))?;
    assert!(locals.contains("### `README.md`"));
    assert!(locals.contains("### `config.codepack.yaml`"));
    Ok(())
}

#[test]
fn test_generate_with_explicit_config() -> Result<()> {
    let project = setup_test_directory()?;
    let elsewhere = TempDir::new()?;
    let config_path = elsewhere.path().join("custom.yaml");
    fs::write(
        &config_path,
        format!(
            "project_path: {}\ncode_extensions: [code]\n",
            project.path().display()
        ),
    )?;
    let output = TempDir::new()?;

    generate_docs(Some(&config_path), elsewhere.path(), output.path())?;

    let data = fs::read_to_string(output.path().join("project-data.md"))?;
    assert!(data.contains("*No files found matching the criteria.*"));
    let locals = fs::read_to_string(output.path().join("project-locals.md"))?;
    assert!(locals.contains("`data/users.json`"));
    Ok(())
}

#[test]
fn test_generate_fails_without_config() -> Result<()> {
    let project = setup_test_directory()?;
    let output = TempDir::new()?;

    let err = generate_docs(None, project.path(), output.path()).err();

    assert!(err.is_some_and(|e| e.to_string().contains("no config file found")));
    Ok(())
}

#[test]
fn test_generate_fails_for_missing_project() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "config.codepack.yaml", "project_path: missing\n")?;

    let err = generate_docs(None, dir.path(), &dir.path().join("out")).err();

    assert!(err.is_some_and(|e| e.to_string().contains("does not exist")));
    assert!(!dir.path().join("out").exists());
    Ok(())
}
