// src/models.rs
mod category_sizes;
mod project_config;
mod scan_result;

pub use category_sizes::CategorySizes;
pub use project_config::{DEFAULT_EXCLUDES, DEFAULT_IGNORE_FILES, DataRule, ProjectConfig};
pub use scan_result::ScanResult;
