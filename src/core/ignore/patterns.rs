// src/core/ignore/patterns.rs
use crate::core::error::ScanWarning;
use glob::{MatchOptions, Pattern};

/// `*` and `?` never cross a `/`; `**` only does as a whole path component.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One compiled ignore-file line.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    is_negation: bool,
    dir_only: bool,
}

impl Rule {
    /// Parses a single line in the gitignore dialect.
    ///
    /// Handles the following forms:
    /// - Blank lines and `#` comments yield no rules
    /// - `!` prefix negates (re-includes)
    /// - Trailing `/` restricts the rule to directories
    /// - A leading or inner `/` anchors the rule to the layer's directory;
    ///   otherwise the rule matches at any depth below it
    /// - `\` escapes the next character
    /// - `**` only spans directories as a whole segment; elsewhere it is `*`
    /// - Extension groups like `*.{js,ts}` expand to one rule per alternative;
    ///   an unbalanced brace is a literal character
    ///
    /// # Errors
    ///
    /// Returns the compile message when the line is not a valid pattern. The
    /// caller records it as a warning and drops the line.
    pub fn parse_line(line: &str) -> Result<Vec<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Vec::new());
        }

        let (line, is_negation) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));

        let dir_only = line.ends_with('/') && !line.ends_with("\\/");
        let body = line.trim_end_matches('/');

        let is_anchored = body.starts_with('/') || body.contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);
        if body.is_empty() {
            return Err(String::from("pattern is empty"));
        }

        expand_braces(body)
            .into_iter()
            .map(|alternative| {
                let glob = collapse_stars(&translate_escapes(&alternative));
                let glob = if is_anchored {
                    glob
                } else {
                    format!("**/{glob}")
                };
                Pattern::new(&glob)
                    .map(|pattern| Self {
                        pattern,
                        is_negation,
                        dir_only,
                    })
                    .map_err(|e| e.to_string())
            })
            .collect()
    }

    #[must_use]
    pub const fn is_negation(&self) -> bool {
        self.is_negation
    }

    /// Whether the rule applies to `path`, which is relative to the rule's layer.
    #[must_use]
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.pattern.matches_with(path, MATCH_OPTIONS)
    }
}

/// An ordered set of rules from one source, scoped to the directory that
/// defined them. Within a layer the last matching rule wins.
#[derive(Debug, Clone)]
pub struct Layer {
    base: String,
    source: String,
    depth: usize,
    rules: Vec<Rule>,
}

impl Layer {
    /// Compiles every line into this layer. Lines that fail to compile are
    /// skipped and pushed onto `warnings`.
    pub fn compile<'a, I>(
        base: &str,
        source: &str,
        lines: I,
        warnings: &mut Vec<ScanWarning>,
    ) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let base = base.trim_matches('/').to_owned();
        let depth = if base.is_empty() {
            0
        } else {
            base.split('/').count()
        };

        let mut rules = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            match Rule::parse_line(line) {
                Ok(parsed) => rules.extend(parsed),
                Err(message) => {
                    let warning = ScanWarning::PatternCompile {
                        source: source.to_owned(),
                        line: index.saturating_add(1),
                        pattern: line.trim().to_owned(),
                        message,
                    };
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        Self {
            base,
            source: source.to_owned(),
            depth,
            rules,
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of path segments in the layer's directory; the root is 0.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `path` (relative to the scan root) lies below this layer's directory.
    #[must_use]
    pub fn applies_to(&self, path: &str) -> bool {
        self.relative(path).is_some()
    }

    /// Folds the layer's rules over `path`: `Some(true)` when the last matching
    /// rule excludes, `Some(false)` when it re-includes, `None` when nothing matched.
    #[must_use]
    pub fn decide(&self, path: &str, is_dir: bool) -> Option<bool> {
        let relative = self.relative(path)?;
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(relative, is_dir))
            .map(|rule| !rule.is_negation())
    }

    fn relative<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base.is_empty() {
            return Some(path);
        }
        path.strip_prefix(self.base.as_str())?
            .strip_prefix('/')
            .filter(|rest| !rest.is_empty())
    }
}

/// Expands one `{a,b,c}` group into its alternatives. Without a balanced
/// group the body is returned unchanged and the braces stay literal.
fn expand_braces(body: &str) -> Vec<String> {
    let group = body.split_once('{').and_then(|(prefix, suffix)| {
        suffix
            .split_once('}')
            .map(|(alternatives, rest)| (prefix, alternatives, rest))
    });
    let Some((prefix, alternatives, rest)) = group else {
        return vec![body.to_owned()];
    };

    alternatives
        .split(',')
        .map(str::trim)
        .map(|alternative| format!("{prefix}{alternative}{rest}"))
        .collect()
}

/// Reduces each run of `*` to a single `*` unless the run fills a whole
/// path segment, where it stays `**`.
fn collapse_stars(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len());
    let mut chars = glob.chars().peekable();
    let mut previous = None;

    while let Some(c) = chars.next() {
        if c != '*' {
            out.push(c);
            previous = Some(c);
            continue;
        }

        let mut run = 1_usize;
        while chars.next_if_eq(&'*').is_some() {
            run = run.saturating_add(1);
        }
        let starts_segment = previous.is_none_or(|p| p == '/');
        let ends_segment = chars.peek().is_none_or(|next| *next == '/');
        if run > 1 && starts_segment && ends_segment {
            out.push_str("**");
        } else {
            out.push('*');
        }
        previous = Some('*');
    }
    out
}

/// Rewrites `\x` escapes into the bracket form the glob engine understands.
fn translate_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push_str(&Pattern::escape(&escaped.to_string()));
            }
        } else {
            out.push(c);
        }
    }
    out
}
