// src/core/ignore/loader.rs
use crate::core::error::ScanWarning;
use crate::core::ignore::Layer;
use std::fs;
use std::io;
use std::path::Path;

/// Loads the ignore files that live directly in `dir`.
///
/// `rel_dir` is `dir` relative to the scan root (empty for the root itself).
/// One layer is returned per ignore file found, in the order of `file_names`,
/// so a later name overrides an earlier one in the same directory. Missing
/// files are skipped silently; unreadable ones are reported in `warnings`
/// unless `dir` itself cannot be listed.
pub fn load_directory_layers(
    dir: &Path,
    rel_dir: &str,
    file_names: &[String],
    warnings: &mut Vec<ScanWarning>,
) -> Vec<Layer> {
    let mut layers = Vec::new();

    for name in file_names {
        let ignore_file = dir.join(name);
        let source = if rel_dir.is_empty() {
            name.clone()
        } else {
            format!("{rel_dir}/{name}")
        };

        match fs::read_to_string(&ignore_file) {
            Ok(content) => {
                let layer = Layer::compile(rel_dir, &source, content.lines(), warnings);
                tracing::debug!(source = %source, empty = layer.is_empty(), "loaded ignore file");
                if !layer.is_empty() {
                    layers.push(layer);
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            // The walker reports a directory it cannot list; one warning is enough.
            Err(err) if fs::read_dir(dir).is_err() => {
                tracing::debug!(
                    source = %source,
                    error = %err,
                    "directory not listable, skipping ignore files"
                );
                return layers;
            }
            Err(err) => {
                let warning = ScanWarning::EntryRead {
                    path: source,
                    message: err.to_string(),
                };
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    layers
}
