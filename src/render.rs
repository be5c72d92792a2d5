// src/render.rs
use crate::core::classifier::Category;
use crate::models::{ProjectConfig, ScanResult};
use crate::utils::format_file_size;
use anyhow::{Context as _, Result, anyhow};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// One output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub category: Category,
    pub title: &'static str,
    pub filename: &'static str,
}

pub const DOCUMENTS: [Document; 3] = [
    Document {
        category: Category::Code,
        title: "Project Code Files",
        filename: "project-code.md",
    },
    Document {
        category: Category::Data,
        title: "Project Data Files",
        filename: "project-data.md",
    },
    Document {
        category: Category::Locals,
        title: "Project Local Files",
        filename: "project-locals.md",
    },
];

/// Creates the output directory if needed.
///
/// # Errors
///
/// Returns an error if `dir` is empty or cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("output directory cannot be empty"));
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))
}

/// Writes the three category documents in parallel.
///
/// # Errors
///
/// Returns the first write failure; the other documents are still attempted.
pub fn write_documents(
    output_dir: &Path,
    result: &ScanResult,
    config: &ProjectConfig,
) -> Result<Vec<PathBuf>> {
    let span = tracing::info_span!("render", output = %output_dir.display());
    let _guard = span.enter();

    let project_name = config.project_name();
    let first_error: Mutex<Option<anyhow::Error>> = Mutex::new(None);

    rayon::scope(|scope| {
        for document in DOCUMENTS {
            let first_error = &first_error;
            let project_name = project_name.as_str();
            scope.spawn(move |_| {
                let output_path = output_dir.join(document.filename);
                let files = result.files(document.category);
                tracing::info!(
                    path = %output_path.display(),
                    files = files.len(),
                    "writing document"
                );

                let written = write_markdown(
                    &output_path,
                    document.title,
                    files,
                    &config.root,
                    project_name,
                );
                if let Err(err) = written {
                    let err = err.context(format!("failed to write {}", document.filename));
                    let mut guard = first_error.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.get_or_insert(err);
                }
            });
        }
    });

    match first_error.into_inner().unwrap_or_else(PoisonError::into_inner) {
        Some(err) => Err(err),
        None => Ok(DOCUMENTS
            .iter()
            .map(|document| output_dir.join(document.filename))
            .collect()),
    }
}

/// Writes one markdown document listing `files` with their contents.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_markdown(
    output_path: &Path,
    title: &str,
    files: &BTreeSet<String>,
    project_root: &Path,
    project_name: &str,
) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("failed to create markdown file {}", output_path.display()))?;
    let mut out = BufWriter::new(file);
    render_markdown(&mut out, title, files, project_root, project_name)?;
    out.flush()?;
    Ok(())
}

/// Renders a document to any writer. `files` iterate in sorted order.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_markdown<W: Write>(
    out: &mut W,
    title: &str,
    files: &BTreeSet<String>,
    project_root: &Path,
    project_name: &str,
) -> Result<()> {
    let sizes: Vec<(&str, Option<u64>)> = files
        .iter()
        .map(|path| {
            let size = fs::metadata(project_root.join(path)).ok().map(|m| m.len());
            (path.as_str(), size)
        })
        .collect();
    let total_size: u64 = sizes.iter().filter_map(|(_, size)| *size).sum();
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    writeln!(out, "# {title}\n")?;
    writeln!(out, "**Project:** {project_name}  ")?;
    writeln!(out, "**Generated:** {generated}  ")?;
    writeln!(out, "**Total Files:** {}  ", files.len())?;
    writeln!(out, "**Total Size:** {}  \n", format_file_size(total_size))?;

    if files.is_empty() {
        writeln!(out, "*No files found matching the criteria.*")?;
        return Ok(());
    }

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "| File | Size |")?;
    writeln!(out, "| --- | --- |")?;
    for (path, size) in &sizes {
        let size = size.map_or_else(|| String::from("unknown"), format_file_size);
        writeln!(out, "| `{path}` | {size} |")?;
    }
    writeln!(out)?;

    for (path, _) in &sizes {
        let Ok(content) = fs::read_to_string(project_root.join(path)) else {
            tracing::debug!(path, "skipping unreadable or non-UTF-8 file");
            continue;
        };
        let lang = Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "### `{path}`\n")?;
        writeln!(out, "```{lang}\n{content}\n```\n")?;
    }

    writeln!(out, "---\n")?;
    writeln!(out, "**Summary:**")?;
    writeln!(out, "- Total files listed: {}", files.len())?;
    writeln!(out, "- Total size: {}", format_file_size(total_size))?;
    writeln!(out, "- Generated by codepack")?;
    Ok(())
}
