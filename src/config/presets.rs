// src/config/presets.rs
use clap::ValueEnum;
use std::fmt::Write as _;

/// Starter configurations written by `codepack init`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Generic,
    Flutter,
    Rust,
    Node,
    Python,
    Go,
}

struct PresetRules {
    code_extensions: &'static [&'static str],
    exclude: &'static [&'static str],
    data_extensions: &'static [&'static str],
    data_directories: &'static [&'static str],
    data_patterns: &'static [&'static str],
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Generic,
        Self::Flutter,
        Self::Rust,
        Self::Node,
        Self::Python,
        Self::Go,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Flutter => "flutter",
            Self::Rust => "rust",
            Self::Node => "node",
            Self::Python => "python",
            Self::Go => "go",
        }
    }

    const fn rules(self) -> PresetRules {
        match self {
            Self::Generic => PresetRules {
                code_extensions: &[
                    "rs", "go", "py", "js", "ts", "jsx", "tsx", "java", "kt", "swift", "dart",
                    "c", "h", "cpp", "hpp", "cs", "rb", "php", "sh",
                ],
                exclude: &[".git/", "node_modules/", "build/", "dist/", "target/"],
                data_extensions: &["json", "csv"],
                data_directories: &["data"],
                data_patterns: &[],
            },
            Self::Flutter => PresetRules {
                code_extensions: &["dart"],
                exclude: &[
                    ".git/",
                    ".dart_tool/",
                    "build/",
                    "ios/Pods/",
                    "*.g.dart",
                    "*.freezed.dart",
                ],
                data_extensions: &["json", "data.dart"],
                data_directories: &["data", "assets/data"],
                data_patterns: &["*.arb"],
            },
            Self::Rust => PresetRules {
                code_extensions: &["rs"],
                exclude: &[".git/", "target/", "Cargo.lock"],
                data_extensions: &["json", "csv"],
                data_directories: &["fixtures", "testdata"],
                data_patterns: &[],
            },
            Self::Node => PresetRules {
                code_extensions: &["js", "mjs", "cjs", "ts", "jsx", "tsx", "vue", "svelte"],
                exclude: &[
                    ".git/",
                    "node_modules/",
                    "dist/",
                    "coverage/",
                    "package-lock.json",
                    "yarn.lock",
                    "pnpm-lock.yaml",
                ],
                data_extensions: &["json"],
                data_directories: &["data", "fixtures"],
                data_patterns: &[],
            },
            Self::Python => PresetRules {
                code_extensions: &["py", "pyi"],
                exclude: &[
                    ".git/",
                    "__pycache__/",
                    ".venv/",
                    "venv/",
                    "*.pyc",
                    ".pytest_cache/",
                ],
                data_extensions: &["json", "csv", "parquet"],
                data_directories: &["data"],
                data_patterns: &[],
            },
            Self::Go => PresetRules {
                code_extensions: &["go"],
                exclude: &[".git/", "vendor/", "bin/", "go.sum"],
                data_extensions: &["json"],
                data_directories: &["testdata"],
                data_patterns: &[],
            },
        }
    }

    /// YAML text for a config file using this preset.
    #[must_use]
    pub fn template(self) -> String {
        let rules = self.rules();
        let mut out = String::new();

        let _ = writeln!(out, "# codepack configuration ({} preset)", self.name());
        out.push_str("project_path: .\n");
        out.push_str("# project_name: my-project\n");
        out.push_str("respect_ignore_files: true\n");
        out.push_str("ignore_files: [\".gitignore\", \".ignore\"]\n");
        write_list(&mut out, "", "exclude", rules.exclude);
        out.push_str("include: []\n");
        write_list(&mut out, "", "code_extensions", rules.code_extensions);
        out.push_str("data:\n");
        write_list(&mut out, "  ", "extensions", rules.data_extensions);
        out.push_str("  path_contains: []\n");
        write_list(&mut out, "  ", "directories", rules.data_directories);
        write_list(&mut out, "  ", "patterns", rules.data_patterns);
        out
    }
}

fn write_list(out: &mut String, indent: &str, key: &str, values: &[&str]) {
    if values.is_empty() {
        let _ = writeln!(out, "{indent}{key}: []");
        return;
    }
    let _ = writeln!(out, "{indent}{key}:");
    for value in values {
        let _ = writeln!(out, "{indent}  - \"{value}\"");
    }
}
