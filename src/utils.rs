// src/utils.rs
use crate::core::classifier::Category;
use crate::models::{CategorySizes, ScanResult};
use colored::Colorize as _;
use std::path::Path;

/// `path` relative to `root`, with `/` separators. `None` for `root` itself
/// or for paths outside it.
#[must_use]
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}

/// Human readable size: bytes below 1 KiB, then one decimal with a binary unit.
#[must_use]
pub fn format_file_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if size < UNIT {
        return format!("{size} B");
    }

    let mut div = UNIT;
    let mut exp = 0_usize;
    let mut n = size / UNIT;
    while n >= UNIT {
        div = div.saturating_mul(UNIT);
        exp = exp.saturating_add(1);
        n /= UNIT;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = size as f64 / div as f64;
    let prefix = PREFIXES.get(exp).copied().unwrap_or('E');
    format!("{value:.1} {prefix}B")
}

/// Title-cased category label, e.g. `Code files`.
#[must_use]
pub fn category_label(category: Category) -> String {
    let name = category.name();
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        format!("{}{} files", first.to_uppercase(), chars.as_str())
    })
}

/// Summary lines for a finished generation, without color codes applied to
/// the tree so the layout is testable.
#[must_use]
pub fn summary_lines(result: &ScanResult, sizes: &CategorySizes) -> Vec<String> {
    let mut lines = vec![format!(
        "Total files scanned: {} ({})",
        result.total,
        format_file_size(sizes.total())
    )];

    let mut categories = Category::ALL.to_vec();
    categories.sort_by_key(|category| std::cmp::Reverse(result.files(*category).len()));

    let last = categories.len().saturating_sub(1);
    for (index, category) in categories.into_iter().enumerate() {
        let prefix = if index == last { "└─" } else { "├─" };
        lines.push(format!(
            "{prefix} {}: {} ({})",
            category_label(category),
            result.files(category).len(),
            format_file_size(sizes.get(category))
        ));
    }

    if result.excluded_total() > 0 {
        lines.push(format!("├─ Excluded files: {}", result.excluded_total()));
    }
    if !result.warnings.is_empty() {
        lines.push(format!("├─ Warnings: {}", result.warnings.len()));
    }
    lines
}

pub fn print_summary(result: &ScanResult, sizes: &CategorySizes, output_dir: &Path) {
    println!("\n{}", "✓ Generation completed successfully!".green());
    for line in summary_lines(result, sizes) {
        println!("{line}");
    }
    for warning in &result.warnings {
        println!("   {} {warning}", "!".yellow());
    }
    println!("\nMarkdown files written to: {}", output_dir.display());
}
