// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod utils;

pub use crate::cli::{Cli, Command, run};
pub use crate::config::{Preset, load_config};
pub use crate::core::classifier::{Category, Classifier};
pub use crate::core::error::{ScanError, ScanWarning};
pub use crate::core::ignore::PatternMatcher;
pub use crate::core::scanner::{category_sizes, scan, scan_project};
pub use crate::models::{CategorySizes, DataRule, ProjectConfig, ScanResult};
