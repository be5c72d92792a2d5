// src/core/classifier.rs
use crate::core::error::ScanWarning;
use crate::core::ignore::MATCH_OPTIONS;
use crate::models::{DataRule, ProjectConfig};
use glob::Pattern;
use std::collections::HashSet;
use std::fmt;

const DATA_RULES_SOURCE: &str = "config:data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Code,
    Data,
    Locals,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Code, Self::Data, Self::Locals];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Data => "data",
            Self::Locals => "locals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
enum CompiledDataRule {
    /// Lowercased `.ext` suffix.
    Extension(String),
    PathContains(String),
    /// Directory path without slashes at either end.
    Directory { path: String, anchored: bool },
    Pattern { pattern: Pattern, whole_path: bool },
}

impl CompiledDataRule {
    fn compile(rule: &DataRule) -> Result<Option<Self>, String> {
        let compiled = match rule {
            DataRule::Extension(ext) => {
                let ext = ext.trim().trim_start_matches('.').to_lowercase();
                (!ext.is_empty()).then(|| Self::Extension(format!(".{ext}")))
            }
            DataRule::PathContains(needle) => {
                (!needle.is_empty()).then(|| Self::PathContains(needle.clone()))
            }
            DataRule::Directory(dir) => {
                let dir = dir.trim();
                let anchored = dir.starts_with('/');
                let path = dir.trim_matches('/');
                (!path.is_empty()).then(|| Self::Directory {
                    path: path.to_owned(),
                    anchored,
                })
            }
            DataRule::Pattern(glob) => {
                let glob = glob.trim();
                let whole_path = glob.contains('/');
                let glob = glob.strip_prefix('/').unwrap_or(glob);
                if glob.is_empty() {
                    None
                } else {
                    let pattern = Pattern::new(glob).map_err(|e| e.to_string())?;
                    Some(Self::Pattern {
                        pattern,
                        whole_path,
                    })
                }
            }
        };
        Ok(compiled)
    }

    fn matches(&self, path: &str, file_name: &str) -> bool {
        match self {
            Self::Extension(suffix) => file_name.to_lowercase().ends_with(suffix.as_str()),
            Self::PathContains(needle) => path.contains(needle.as_str()),
            Self::Directory { path: dir, anchored } => {
                if *anchored {
                    path.strip_prefix(dir.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
                } else {
                    format!("/{path}").contains(&format!("/{dir}/"))
                }
            }
            Self::Pattern {
                pattern,
                whole_path,
            } => {
                let subject = if *whole_path { path } else { file_name };
                pattern.matches_with(subject, MATCH_OPTIONS)
            }
        }
    }
}

/// Assigns each file to exactly one category.
///
/// Data rules are checked first, then code extensions; everything else is a
/// local file. Pure function of the path and the rule table.
#[derive(Debug, Clone)]
pub struct Classifier {
    data_rules: Vec<CompiledDataRule>,
    code_extensions: HashSet<String>,
}

impl Classifier {
    /// Builds the rule table. Data rules that fail to compile are dropped and
    /// pushed onto `warnings`.
    pub fn new(config: &ProjectConfig, warnings: &mut Vec<ScanWarning>) -> Self {
        let mut data_rules = Vec::with_capacity(config.data_rules.len());
        for (index, rule) in config.data_rules.iter().enumerate() {
            match CompiledDataRule::compile(rule) {
                Ok(Some(compiled)) => data_rules.push(compiled),
                Ok(None) => {}
                Err(message) => {
                    let warning = ScanWarning::PatternCompile {
                        source: DATA_RULES_SOURCE.to_owned(),
                        line: index.saturating_add(1),
                        pattern: format!("{rule:?}"),
                        message,
                    };
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        let code_extensions = config
            .code_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            data_rules,
            code_extensions,
        }
    }

    #[must_use]
    pub fn classify(&self, path: &str) -> Category {
        let file_name = path.rsplit('/').next().unwrap_or(path);

        if self
            .data_rules
            .iter()
            .any(|rule| rule.matches(path, file_name))
        {
            return Category::Data;
        }

        let is_code = file_name
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .is_some_and(|(_, ext)| self.code_extensions.contains(&ext.to_lowercase()));
        if is_code {
            return Category::Code;
        }

        Category::Locals
    }
}
