// src/config.rs
mod presets;

pub use presets::Preset;

use crate::models::{DEFAULT_EXCLUDES, DEFAULT_IGNORE_FILES, DataRule, ProjectConfig};
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config files searched in the working directory, in order of preference.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["config.codepack.yaml", ".codepack.yaml"];

/// On-disk configuration as written by users.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub project_path: Option<PathBuf>,
    pub project_name: Option<String>,
    pub respect_ignore_files: Option<bool>,
    pub ignore_files: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub code_extensions: Vec<String>,
    #[serde(default)]
    pub data: DataSection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub path_contains: Vec<String>,
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl DataSection {
    fn into_rules(self) -> Vec<DataRule> {
        self.extensions
            .into_iter()
            .map(DataRule::Extension)
            .chain(self.path_contains.into_iter().map(DataRule::PathContains))
            .chain(self.directories.into_iter().map(DataRule::Directory))
            .chain(self.patterns.into_iter().map(DataRule::Pattern))
            .collect()
    }
}

impl ConfigFile {
    /// Parses YAML, or TOML when `path` ends in `.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid for the chosen format.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            toml::from_str(content).with_context(|| format!("Invalid TOML in {}", path.display()))
        } else {
            serde_yaml_ng::from_str(content)
                .with_context(|| format!("Invalid YAML in {}", path.display()))
        }
    }

    /// Resolves the file into a scan configuration. A relative
    /// `project_path` is taken relative to `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_path` is missing or empty.
    pub fn into_project_config(self, base_dir: &Path) -> Result<ProjectConfig> {
        let Some(project_path) = self.project_path.filter(|p| !p.as_os_str().is_empty()) else {
            bail!("project path is required in config");
        };
        let joined = if project_path.is_absolute() {
            project_path
        } else {
            base_dir.join(project_path)
        };
        // `./.` and `app/./` reduce to their plain form.
        let root: PathBuf = joined.components().collect();

        let to_owned = |values: &[&str]| -> Vec<String> {
            values.iter().map(|s| (*s).to_owned()).collect()
        };

        Ok(ProjectConfig {
            root,
            name: self.project_name.filter(|n| !n.trim().is_empty()),
            exclude: self.exclude.unwrap_or_else(|| to_owned(DEFAULT_EXCLUDES)),
            include: self.include,
            code_extensions: self.code_extensions,
            data_rules: self.data.into_rules(),
            respect_ignore_files: self.respect_ignore_files.unwrap_or(true),
            ignore_file_names: self
                .ignore_files
                .unwrap_or_else(|| to_owned(DEFAULT_IGNORE_FILES)),
        })
    }
}

/// Loads and resolves a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or lacks a project path.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file = ConfigFile::parse(&content, path)?;
    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    file.into_project_config(base_dir)
}

/// Checks that the configured project directory exists.
///
/// # Errors
///
/// Returns an error if the root does not exist.
pub fn validate_config(config: &ProjectConfig) -> Result<()> {
    if !config.root.exists() {
        bail!("project path does not exist: {}", config.root.display());
    }
    Ok(())
}

/// Picks the explicit config path or the first default file found in `dir`.
///
/// # Errors
///
/// Returns an error if the explicit path does not exist or no default file is found.
pub fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .with_context(|| {
            format!(
                "no config file found. Please specify one with -c flag or create one of: {}",
                DEFAULT_CONFIG_FILES.join(", ")
            )
        })
}
