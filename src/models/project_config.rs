// src/models/project_config.rs
use std::fs;
use std::path::PathBuf;

/// Ignore files honored in every directory, in override order.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// User exclude patterns applied when a configuration does not list any.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git/"];

/// A rule that marks a file as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRule {
    /// File name ends with `.{ext}`; may span several dots (`data.dart`).
    Extension(String),
    /// Relative path contains the substring.
    PathContains(String),
    /// File lives below a directory of this name, or below this exact
    /// directory when the value starts with `/`.
    Directory(String),
    /// Glob matched against the file name, or against the whole relative
    /// path when it contains a `/`.
    Pattern(String),
}

/// Resolved scan configuration. Read-only to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub name: Option<String>,
    /// Gitignore-dialect exclude patterns, highest precedence.
    pub exclude: Vec<String>,
    /// When non-empty, files matching none of these are excluded.
    pub include: Vec<String>,
    /// Extensions (no dot, any case) classified as code.
    pub code_extensions: Vec<String>,
    pub data_rules: Vec<DataRule>,
    pub respect_ignore_files: bool,
    pub ignore_file_names: Vec<String>,
}

impl ProjectConfig {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            name: None,
            exclude: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_owned()).collect(),
            include: Vec::new(),
            code_extensions: Vec::new(),
            data_rules: Vec::new(),
            respect_ignore_files: true,
            ignore_file_names: DEFAULT_IGNORE_FILES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Display name: the configured name, else the root directory's name.
    /// A root such as `.` is resolved against the filesystem first.
    #[must_use]
    pub fn project_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.root
            .file_name()
            .map(ToOwned::to_owned)
            .or_else(|| fs::canonicalize(&self.root).ok()?.file_name().map(ToOwned::to_owned))
            .map_or_else(
                || self.root.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}
