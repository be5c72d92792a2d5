// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::{CommandFactory as _, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{Preset, load_config, resolve_config_path, validate_config};
use crate::core::scanner::{category_sizes, scan_project, total_size};
use crate::models::{CategorySizes, ScanResult};
use crate::render::{ensure_output_dir, write_documents};
use crate::utils::print_summary;

#[derive(Parser, Debug)]
#[command(
    name = "codepack",
    author,
    version,
    about = "Pack a project's code, data and local files into markdown documents",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the project and write the markdown documents
    Generate {
        /// Config file (defaults to config.codepack.yaml or .codepack.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory the documents are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Write a starter config file
    Init {
        /// Project flavour to seed the config with
        #[arg(value_enum, default_value_t = Preset::Generic)]
        preset: Preset,

        /// Where to write the config
        #[arg(short, long, default_value = "config.codepack.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print shell completions to stdout
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Executes a parsed command line.
///
/// # Errors
///
/// Returns an error if the selected command fails.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { config, output_dir } => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            generate_docs(config.as_deref(), &cwd, &output_dir)
        }
        Command::Init {
            preset,
            output,
            force,
        } => init_config(preset, &output, force),
        Command::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
    }
}

/// Runs the full generation: config, scan, sizes, documents, summary.
///
/// # Arguments
///
/// * `config` - Explicit config path, if any
/// * `search_dir` - Directory searched for a default config file
/// * `output_dir` - Where the three documents go
///
/// # Errors
///
/// Returns an error if the config is missing or invalid, the scan root is
/// unusable, or a document cannot be written.
pub fn generate_docs(
    config: Option<&Path>,
    search_dir: &Path,
    output_dir: &Path,
) -> Result<()> {
    let config_path = resolve_config_path(config, search_dir)?;
    info!(config = %config_path.display(), "loading configuration");
    let project = load_config(&config_path)?;
    validate_config(&project)?;
    ensure_output_dir(output_dir)?;

    println!("{} {}", "Scanning".cyan().bold(), project.root.display());
    let result = scan_project(&project)?;
    let sizes = sizes_or_partial(&project.root, &result);
    write_documents(output_dir, &result, &project)?;

    print_summary(&result, &sizes, output_dir);
    Ok(())
}

/// Category sizes for the summary. A failed aggregation leaves the path
/// lists valid, so each category falls back to its own total, or 0.
fn sizes_or_partial(root: &Path, result: &ScanResult) -> CategorySizes {
    category_sizes(root, result).unwrap_or_else(|err| {
        warn!(error = %err, "size aggregation failed, summary sizes are partial");
        CategorySizes {
            code: total_size(root, &result.code).unwrap_or_default(),
            data: total_size(root, &result.data).unwrap_or_default(),
            locals: total_size(root, &result.locals).unwrap_or_default(),
        }
    })
}

/// Writes the preset's config template to `output`.
///
/// # Errors
///
/// Returns an error if `output` exists and `force` is not set, or the write fails.
pub fn init_config(preset: Preset, output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!("{} already exists; use --force to overwrite", output.display());
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(output, preset.template())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(preset = preset.name(), path = %output.display(), "wrote config");
    println!(
        "{} Created {} ({} preset)",
        "✓".green(),
        output.display(),
        preset.name()
    );
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
