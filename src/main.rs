//! CLI for site-cards - Render academic website sections as HTML cards.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use site_cards::{
    coauthor_cards, parse_bibtex, parse_names, parse_records, project_cards, publication_cards,
    stats_grid, ProjectRecord,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Render academic website sections as HTML cards
#[derive(Parser)]
#[command(name = "site-cards")]
#[command(version)]
#[command(after_help = "\
Examples:
  site-cards publications assets/data/publications.bib
  site-cards coauthors assets/data/coauthors.csv -o coauthors.html
  site-cards projects assets/data/projects.json --grants assets/data/grants.json
  cat publications.bib | site-cards publications -")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render publication cards from a BibTeX file
    #[command(after_help = "\
Examples:
  site-cards publications publications.bib
  site-cards publications publications.bib -o publications.html

Unrecognized records and fields are skipped silently; an empty or
unparseable file renders the 'No publications found.' placeholder.")]
    Publications {
        /// Input BibTeX file (use '-' for stdin)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render co-author cards from a CSV file
    Coauthors {
        /// Input CSV file with a 'name' column (use '-' for stdin)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render project/grant cards or the stats grid from JSON files
    #[command(after_help = "\
Examples:
  site-cards projects projects.json
  site-cards projects projects.json --grants grants.json
  site-cards projects projects.json --grants grants.json --stats")]
    Projects {
        /// Input projects JSON file (an array of records; '-' for stdin)
        input: PathBuf,

        /// Optional grants JSON file, rendered after the projects
        #[arg(short, long)]
        grants: Option<PathBuf>,

        /// Emit the summary stats grid instead of cards
        #[arg(long)]
        stats: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — data file has an invalid format
    DataFormat(String),
    /// Exit 15 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::DataFormat(_) => 11,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::DataFormat(msg) => {
                write!(
                    f,
                    "{}\n  hint: projects and grants files must be a JSON array of records",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Publications { input, output } => {
            publications_command(&input, output.as_deref())
        }
        Commands::Coauthors { input, output } => coauthors_command(&input, output.as_deref()),
        Commands::Projects {
            input,
            grants,
            stats,
            output,
        } => projects_command(&input, grants.as_deref(), stats, output.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Render publication cards from a BibTeX file.
fn publications_command(input: &Path, output: Option<&Path>) -> Result<(), AppError> {
    let text = read_input(input)?;
    let entries = parse_bibtex(&text);
    let fragment = publication_cards(&entries);
    write_output(&fragment, output, &format!("{} publication(s)", entries.len()))
}

/// Render co-author cards from a CSV file.
fn coauthors_command(input: &Path, output: Option<&Path>) -> Result<(), AppError> {
    let text = read_input(input)?;
    let names = parse_names(&text);
    let fragment = coauthor_cards(&names);
    write_output(&fragment, output, &format!("{} co-author(s)", names.len()))
}

/// Render project/grant cards or the stats grid.
fn projects_command(
    input: &Path,
    grants: Option<&Path>,
    stats: bool,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let projects = read_records(input)?;
    let grants = match grants {
        Some(path) => read_records(path)?,
        None => Vec::new(),
    };

    let fragment = if stats {
        stats_grid(&projects, &grants)
    } else {
        let mut parts = vec![project_cards(&projects)];
        if !grants.is_empty() {
            parts.push(project_cards(&grants));
        }
        parts.retain(|p| !p.is_empty());
        parts.join("\n")
    };

    write_output(
        &fragment,
        output,
        &format!("{} record(s)", projects.len() + grants.len()),
    )
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

/// Reads a text input, supporting '-' for stdin.
fn read_input(input: &Path) -> Result<String, AppError> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))
    }
}

/// Reads and parses a JSON records file. I/O failures surface from
/// `read_input`; anything `parse_records` reports is a format problem.
fn read_records(input: &Path) -> Result<Vec<ProjectRecord>, AppError> {
    let text = read_input(input)?;
    parse_records(&text)
        .map_err(|e| AppError::DataFormat(format!("'{}': {}", input.display(), e)))
}

/// Writes the fragment to a file or stdout, with a summary line on stderr
/// when writing a file.
fn write_output(fragment: &str, output: Option<&Path>, summary: &str) -> Result<(), AppError> {
    if let Some(output_path) = output {
        fs::write(output_path, fragment)
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", output_path.display(), e)))?;
        eprintln!("rendered {}, wrote {}", summary, output_path.display());
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", fragment)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }
    Ok(())
}
