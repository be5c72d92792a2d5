// src/core/scanner/walker.rs
use crate::core::error::ScanWarning;
use crate::core::ignore::PatternMatcher;
use crate::utils::relative_slash_path;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// A discovered entry that survived the exclusion check.
#[derive(Debug, Clone, Copy)]
pub struct ScanEntry<'a> {
    pub relative_path: &'a str,
    pub path: &'a Path,
    pub is_dir: bool,
}

impl ScanEntry<'_> {
    /// Size on disk, fetched on demand.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the entry can no longer be stat'd.
    pub fn size(&self) -> io::Result<u64> {
        fs::metadata(self.path).map(|metadata| metadata.len())
    }
}

/// What the walker reports to its visitor.
#[derive(Debug)]
pub enum Visit<'a> {
    /// A directory that will be descended into unless the visitor skips it.
    Directory(ScanEntry<'a>),
    /// A file that passed the matcher.
    File(ScanEntry<'a>),
    /// A file the matcher excluded.
    ExcludedFile { relative_path: &'a str },
    /// A directory the matcher excluded; its subtree is never visited.
    PrunedDirectory { relative_path: &'a str, estimate: u64 },
    /// An entry that could not be stat'd or read.
    Unreadable {
        warning: ScanWarning,
        is_dir: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    SkipSubtree,
}

/// Walks `root` depth-first without following symlinked directories.
///
/// Ignore files are loaded into `matcher` as their directory is entered, so
/// every entry is judged by the layers of all its ancestors. Excluded
/// directories are pruned; the estimate reported for them is their immediate
/// entry count. A symlink to a file is treated as a file at its own path.
pub fn walk<F>(
    root: &Path,
    matcher: &mut PatternMatcher,
    warnings: &mut Vec<ScanWarning>,
    mut visit: F,
) where
    F: FnMut(Visit<'_>) -> Flow,
{
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = entries.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .and_then(|path| relative_slash_path(root, path))
                    .unwrap_or_default();
                visit(Visit::Unreadable {
                    warning: ScanWarning::EntryRead {
                        path,
                        message: err.to_string(),
                    },
                    is_dir: true,
                });
                continue;
            }
        };

        if entry.depth() == 0 {
            matcher.enter_directory(entry.path(), "", warnings);
            continue;
        }

        let Some(relative_path) = relative_slash_path(root, entry.path()) else {
            continue;
        };
        matcher.leave_directories_until(&relative_path);

        let file_type = entry.file_type();
        let is_dir = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => {
                    tracing::debug!(path = %relative_path, "not following directory symlink");
                    continue;
                }
                Ok(_) => false,
                Err(err) => {
                    visit(Visit::Unreadable {
                        warning: ScanWarning::EntryRead {
                            path: relative_path,
                            message: err.to_string(),
                        },
                        is_dir: false,
                    });
                    continue;
                }
            }
        } else {
            file_type.is_dir()
        };

        if matcher.is_excluded(&relative_path, is_dir) {
            if is_dir {
                entries.skip_current_dir();
                let estimate = estimate_entries(entry.path());
                tracing::debug!(path = %relative_path, estimate, "pruned directory");
                visit(Visit::PrunedDirectory {
                    relative_path: &relative_path,
                    estimate,
                });
            } else {
                tracing::debug!(path = %relative_path, "excluded file");
                visit(Visit::ExcludedFile {
                    relative_path: &relative_path,
                });
            }
            continue;
        }

        let scan_entry = ScanEntry {
            relative_path: &relative_path,
            path: entry.path(),
            is_dir,
        };

        if is_dir {
            if visit(Visit::Directory(scan_entry)) == Flow::SkipSubtree {
                entries.skip_current_dir();
                continue;
            }
            matcher.enter_directory(entry.path(), &relative_path, warnings);
        } else {
            let is_ignore_file = entry
                .file_name()
                .to_str()
                .is_some_and(|name| matcher.is_ignore_file_name(name));
            if is_ignore_file {
                tracing::debug!(path = %relative_path, "ignore file kept as a regular file");
            }
            visit(Visit::File(scan_entry));
        }
    }
}

/// Immediate entry count of a pruned directory; 1 when it cannot be listed.
fn estimate_entries(dir: &Path) -> u64 {
    fs::read_dir(dir).map_or(1, |entries| {
        u64::try_from(entries.count()).unwrap_or(u64::MAX)
    })
}
