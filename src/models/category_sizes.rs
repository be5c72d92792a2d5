// src/models/category_sizes.rs
use crate::core::classifier::Category;

/// Total bytes per category, computed after the scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategorySizes {
    pub code: u64,
    pub data: u64,
    pub locals: u64,
}

impl CategorySizes {
    #[must_use]
    pub const fn get(&self, category: Category) -> u64 {
        match category {
            Category::Code => self.code,
            Category::Data => self.data,
            Category::Locals => self.locals,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.code.saturating_add(self.data).saturating_add(self.locals)
    }
}
