// src/models/scan_result.rs
use crate::core::classifier::Category;
use crate::core::error::ScanWarning;
use std::collections::BTreeSet;

/// Outcome of one scan. Paths are slash-separated and relative to the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub code: BTreeSet<String>,
    pub data: BTreeSet<String>,
    pub locals: BTreeSet<String>,
    /// Files visited by the walker, classified or excluded.
    pub total: u64,
    /// Visited files that were excluded.
    pub excluded: u64,
    /// Estimated entries inside pruned or unreadable directories; never visited.
    pub pruned: u64,
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    #[must_use]
    pub const fn files(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Code => &self.code,
            Category::Data => &self.data,
            Category::Locals => &self.locals,
        }
    }

    pub(crate) fn record(&mut self, path: String, category: Category) {
        self.total = self.total.saturating_add(1);
        match category {
            Category::Code => self.code.insert(path),
            Category::Data => self.data.insert(path),
            Category::Locals => self.locals.insert(path),
        };
    }

    pub(crate) fn record_excluded(&mut self) {
        self.total = self.total.saturating_add(1);
        self.excluded = self.excluded.saturating_add(1);
    }

    pub(crate) fn record_pruned(&mut self, estimate: u64) {
        self.pruned = self.pruned.saturating_add(estimate);
    }

    pub(crate) fn warn(&mut self, warning: ScanWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Category a path was assigned to, if any.
    #[must_use]
    pub fn category_of(&self, path: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.files(*category).contains(path))
    }

    #[must_use]
    pub fn classified(&self) -> u64 {
        let count = self
            .code
            .len()
            .saturating_add(self.data.len())
            .saturating_add(self.locals.len());
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Visited exclusions plus the estimate for pruned subtrees.
    #[must_use]
    pub const fn excluded_total(&self) -> u64 {
        self.excluded.saturating_add(self.pruned)
    }
}
