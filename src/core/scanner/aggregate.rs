// src/core/scanner/aggregate.rs
use crate::core::error::ScanError;
use crate::models::{CategorySizes, ScanResult};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Sums the byte size of every category, one worker per category.
///
/// Files deleted since the scan count as zero bytes.
///
/// # Errors
///
/// Returns the first [`ScanError::Aggregation`] any worker hits. The scan
/// result itself is untouched.
pub fn category_sizes(root: &Path, result: &ScanResult) -> Result<CategorySizes, ScanError> {
    let mut sizes = CategorySizes::default();
    let first_error: Mutex<Option<ScanError>> = Mutex::new(None);

    let jobs = [
        (&result.code, &mut sizes.code),
        (&result.data, &mut sizes.data),
        (&result.locals, &mut sizes.locals),
    ];
    rayon::scope(|scope| {
        for (files, slot) in jobs {
            let first_error = &first_error;
            scope.spawn(move |_| match total_size(root, files) {
                Ok(size) => *slot = size,
                Err(err) => {
                    let mut guard = first_error.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.get_or_insert(err);
                }
            });
        }
    });

    match first_error.into_inner().unwrap_or_else(PoisonError::into_inner) {
        Some(err) => Err(err),
        None => Ok(sizes),
    }
}

/// Total size of `files`, relative to `root`.
///
/// # Errors
///
/// Fails on the first file that exists but cannot be stat'd.
pub fn total_size(root: &Path, files: &BTreeSet<String>) -> Result<u64, ScanError> {
    let mut total: u64 = 0;
    for file in files {
        let path = root.join(file);
        match fs::metadata(&path) {
            Ok(metadata) => total = total.saturating_add(metadata.len()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %file, "file vanished before its size was read");
            }
            Err(source) => return Err(ScanError::Aggregation { path, source }),
        }
    }
    Ok(total)
}
