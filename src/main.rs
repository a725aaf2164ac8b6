//! tc2md — generate Markdown scenario docs from annotated Go test files.
//!
//! Two modes:
//!
//! - **stdin mode**: `tc2md < foo_test.go` prints Markdown to stdout
//! - **file mode**: `tc2md -o docs/scenarios pkg/*_test.go` writes one
//!   `<name>.md` per input file

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tc2md",
    about = "Generate Markdown scenario docs from annotated comments in Go tests"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Emit every annotated comment as-is, without grouping by test function
    #[arg(long)]
    flat: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tc2md={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// stdin mode: read one source file from stdin, write Markdown to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let lines: Vec<&str> = input.lines().collect();
    let markdown = run_conversion(&lines, cli.flat).context("failed to convert stdin")?;
    print!("{}", tc2md::render::to_text(&markdown));
    Ok(())
}

/// file mode: convert every input file into a Markdown file in the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let outputs = plan_outputs(&input_files, output_dir)?;

    for (path, out_path) in input_files.iter().zip(&outputs) {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let lines: Vec<&str> = content.lines().collect();

        let markdown = match run_conversion(&lines, cli.flat) {
            Ok(markdown) => markdown,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        fs::write(out_path, tc2md::render::to_text(&markdown))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(
            "{} -> {} ({} lines)",
            path.display(),
            out_path.display(),
            markdown.len()
        );
    }

    Ok(())
}

/// Output path for every input, refusing inputs whose names would overwrite
/// each other. Checked before anything is written.
fn plan_outputs(inputs: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(inputs.len());
    for path in inputs {
        let out_path = output_dir.join(format!("{}.md", derive_output_name(path)));
        if let Some(first) = claimed.insert(out_path.clone(), path) {
            bail!(
                "{} and {} would both be written to {}",
                first.display(),
                path.display(),
                out_path.display()
            );
        }
        outputs.push(out_path);
    }
    Ok(outputs)
}

fn run_conversion(lines: &[&str], flat: bool) -> tc2md::Result<Vec<String>> {
    if flat {
        tc2md::convert_flat(lines)
    } else {
        tc2md::convert(lines)
    }
}

/// Suffix of the files picked up when a directory is given.
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for Go test files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let is_test_file = p
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(TEST_FILE_SUFFIX));
                if p.is_file() && is_test_file {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output file stem for a source path: "pkg/door_test.go" → "door_test".
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "scenario".to_string())
}
