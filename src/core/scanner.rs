// src/core/scanner.rs
mod aggregate;
mod walker;


pub use aggregate::{category_sizes, total_size};
pub use walker::{Flow, ScanEntry, Visit, walk};

use crate::core::classifier::Classifier;
use crate::core::error::ScanError;
use crate::core::ignore::PatternMatcher;
use crate::models::{ProjectConfig, ScanResult};
use std::fs;
use std::path::Path;
use tracing::{Level, debug, info, span};

/// Scans `root` and classifies every file that survives the exclusion rules.
///
/// # Arguments
///
/// * `root` - The directory to scan
/// * `config` - Exclusion patterns, category rules and ignore-file settings
///
/// # Returns
///
/// * `Ok(ScanResult)` - The three category sets plus visit and exclusion counters
///
/// # Errors
///
/// Returns [`ScanError::InvalidRoot`] if `root` does not exist, is not a
/// directory, or cannot be listed. Every other problem is recorded as a
/// warning on the result and the entry involved counts as excluded.
pub fn scan(root: &Path, config: &ProjectConfig) -> Result<ScanResult, ScanError> {
    let span = span!(Level::DEBUG, "scan", root = %root.display());
    let _guard = span.enter();

    validate_root(root)?;

    let mut result = ScanResult::default();
    let mut warnings = Vec::new();
    let mut matcher = PatternMatcher::new(config, &mut warnings);
    let classifier = Classifier::new(config, &mut warnings);

    walk(root, &mut matcher, &mut warnings, |visit| {
        match visit {
            Visit::Directory(_) => {}
            Visit::File(entry) => {
                let category = classifier.classify(entry.relative_path);
                debug!(path = entry.relative_path, %category, "classified");
                result.record(entry.relative_path.to_owned(), category);
            }
            Visit::ExcludedFile { .. } => result.record_excluded(),
            Visit::PrunedDirectory { estimate, .. } => result.record_pruned(estimate),
            Visit::Unreadable { warning, is_dir } => {
                if is_dir {
                    result.record_pruned(1);
                } else {
                    result.record_excluded();
                }
                result.warn(warning);
            }
        }
        Flow::Continue
    });

    // Pattern and ignore-file warnings were already logged where they arose.
    warnings.append(&mut result.warnings);
    result.warnings = warnings;

    info!(
        total = result.total,
        code = result.code.len(),
        data = result.data.len(),
        locals = result.locals.len(),
        excluded = result.excluded,
        pruned = result.pruned,
        warnings = result.warnings.len(),
        "scan finished"
    );
    Ok(result)
}

/// Scans the root named by the configuration itself.
///
/// # Errors
///
/// Same as [`scan`].
pub fn scan_project(config: &ProjectConfig) -> Result<ScanResult, ScanError> {
    scan(&config.root, config)
}

fn validate_root(root: &Path) -> Result<(), ScanError> {
    let invalid = |reason: String| ScanError::InvalidRoot {
        path: root.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(root).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(invalid(String::from("not a directory")));
    }
    fs::read_dir(root).map_err(|e| invalid(format!("not readable: {e}")))?;
    Ok(())
}
