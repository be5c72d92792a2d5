// src/core/error.rs
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures returned to the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is missing, unreadable, or not a directory.
    #[error("invalid scan root {}: {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// A post-scan size worker failed. Category path lists stay valid.
    #[error("failed to aggregate size of {}: {source}", path.display())]
    Aggregation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Non-fatal conditions recorded while scanning.
///
/// Warnings never abort a scan; their effect on the result (a dropped pattern,
/// an entry counted as excluded) is applied whether or not anyone reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// A pattern line that failed to compile and was skipped.
    PatternCompile {
        source: String,
        line: usize,
        pattern: String,
        message: String,
    },
    /// A directory or file that could not be stat'd or read.
    EntryRead { path: String, message: String },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternCompile {
                source,
                line,
                pattern,
                message,
            } => write!(
                f,
                "skipped pattern `{pattern}` ({source}:{line}): {message}"
            ),
            Self::EntryRead { path, message } => {
                write!(f, "could not read `{path}`: {message}")
            }
        }
    }
}
