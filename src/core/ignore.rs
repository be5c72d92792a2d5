// src/core/ignore.rs
mod loader;
mod patterns;

pub use loader::load_directory_layers;
pub use patterns::{Layer, MATCH_OPTIONS, Rule};

use crate::core::error::ScanWarning;
use crate::models::ProjectConfig;
use std::path::Path;

/// Source label for patterns that come from the configuration file.
pub const CONFIG_SOURCE: &str = "config:exclude";
const INCLUDE_SOURCE: &str = "config:include";

/// Decides whether a path relative to the scan root is excluded.
///
/// Ignore-file layers are folded root-to-leaf, so a deeper ignore file
/// overrides a shallower one and a later line overrides an earlier one. The
/// configuration's exclude list is folded last and cannot be overridden by
/// any ignore file. When include patterns are configured, a file that none of
/// them match is excluded as well.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    ignore_layers: Vec<Layer>,
    config_layer: Layer,
    include_layer: Option<Layer>,
    ignore_file_names: Vec<String>,
}

impl PatternMatcher {
    /// Compiles the configuration layers. Ignore-file layers are added while walking.
    pub fn new(config: &ProjectConfig, warnings: &mut Vec<ScanWarning>) -> Self {
        let config_layer = Layer::compile(
            "",
            CONFIG_SOURCE,
            config.exclude.iter().map(String::as_str),
            warnings,
        );
        let include_layer = (!config.include.is_empty()).then(|| {
            Layer::compile(
                "",
                INCLUDE_SOURCE,
                config.include.iter().map(String::as_str),
                warnings,
            )
        });
        let ignore_file_names = if config.respect_ignore_files {
            config.ignore_file_names.clone()
        } else {
            Vec::new()
        };

        Self {
            ignore_layers: Vec::new(),
            config_layer,
            include_layer,
            ignore_file_names,
        }
    }

    /// Whether ignore files are discovered at all.
    #[must_use]
    pub fn reads_ignore_files(&self) -> bool {
        !self.ignore_file_names.is_empty()
    }

    #[must_use]
    pub fn is_ignore_file_name(&self, name: &str) -> bool {
        self.ignore_file_names.iter().any(|n| n == name)
    }

    /// Reads the ignore files in `dir` and layers them above every layer
    /// currently loaded.
    pub fn enter_directory(
        &mut self,
        dir: &Path,
        rel_dir: &str,
        warnings: &mut Vec<ScanWarning>,
    ) {
        if !self.reads_ignore_files() {
            return;
        }
        let layers = load_directory_layers(dir, rel_dir, &self.ignore_file_names, warnings);
        for layer in layers {
            self.push_layer(layer);
        }
    }

    /// Adds an ignore-file layer, keeping layers ordered shallow to deep.
    pub fn push_layer(&mut self, layer: Layer) {
        let position = self
            .ignore_layers
            .iter()
            .rposition(|existing| existing.depth() <= layer.depth())
            .map_or(0, |index| index.saturating_add(1));
        self.ignore_layers.insert(position, layer);
    }

    /// Drops trailing layers whose directory does not contain `path`.
    ///
    /// During a depth-first walk the loaded layers always form one chain
    /// from the root, so popping from the end is enough to leave a subtree.
    pub fn leave_directories_until(&mut self, path: &str) {
        while self
            .ignore_layers
            .last()
            .is_some_and(|layer| !layer.applies_to(path))
        {
            self.ignore_layers.pop();
        }
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.ignore_layers.len()
    }

    /// Evaluates `path` alone, assuming none of its ancestors is excluded.
    ///
    /// This is what the walker asks at every entry: excluded ancestors were
    /// already pruned, so their descendants are never evaluated.
    #[must_use]
    pub fn is_excluded(&self, path: &str, is_dir: bool) -> bool {
        let mut excluded = None;
        for layer in &self.ignore_layers {
            if let Some(verdict) = layer.decide(path, is_dir) {
                excluded = Some(verdict);
            }
        }
        if let Some(verdict) = self.config_layer.decide(path, is_dir) {
            excluded = Some(verdict);
        }

        if excluded.unwrap_or(false) {
            return true;
        }

        match &self.include_layer {
            Some(include) if !is_dir => include.decide(path, false) != Some(true),
            _ => false,
        }
    }

    /// Full check for an arbitrary relative path.
    ///
    /// A path below an excluded directory is excluded no matter what a
    /// negation pattern says about the path itself.
    #[must_use]
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        let path = path.trim_matches('/');
        let mut end = 0;
        while let Some(offset) = path.get(end..).and_then(|rest| rest.find('/')) {
            end = end.saturating_add(offset);
            if let Some(ancestor) = path.get(..end) {
                if self.is_excluded(ancestor, true) {
                    return true;
                }
            }
            end = end.saturating_add(1);
        }
        self.is_excluded(path, is_dir)
    }
}
