//! Quoll CLI
//!
//! Structural HTML/CSS checking for automated grading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use quoll_dom::DocumentView;
use quoll_grader::{GradeConfig, grade};
use quoll_report::clear_report_files;

/// Structural HTML/CSS checker for automated grading
#[derive(Parser, Debug)]
#[command(name = "quoll")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Run every suite in a grading configuration
    quoll run --config grade.json

    # Grade a different document with the same suites
    quoll run --config grade.json --target submission.html

    # Grade locally even when the config enables submission
    quoll run --config grade.json --no-submit

    # Fail the process when any suite fails
    quoll run --config grade.json --strict

    # Remove report files from a previous run
    quoll clean --report-dir reports

    # Show a document the way the checkers see it
    quoll inspect index.html --css
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every suite in a grading configuration
    Run {
        /// Path to the grading configuration (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,

        /// Override the configured target document
        #[arg(long, value_name = "FILE")]
        target: Option<PathBuf>,

        /// Override the configured report directory
        #[arg(long, value_name = "DIR")]
        report_dir: Option<PathBuf>,

        /// Skip submission even when the configuration enables it
        #[arg(long)]
        no_submit: bool,

        /// Exit nonzero when any suite fails
        #[arg(long)]
        strict: bool,
    },
    /// Delete report files left by previous runs
    Clean {
        /// Directory holding the report files
        #[arg(long, value_name = "DIR", default_value = ".")]
        report_dir: PathBuf,
    },
    /// Print a document's structure as the checkers see it
    Inspect {
        /// Path to the HTML file
        file: PathBuf,

        /// Also print the extracted head stylesheet text
        #[arg(long)]
        css: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            target,
            report_dir,
            no_submit,
            strict,
        } => run(&config, target, report_dir, no_submit, strict),
        Command::Clean { report_dir } => clean(&report_dir),
        Command::Inspect { file, css } => inspect(&file, css),
    }
}

fn run(
    config_path: &Path,
    target: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    no_submit: bool,
    strict: bool,
) -> Result<()> {
    let mut config = GradeConfig::from_file(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(target) = target {
        config.target = target;
    }
    if let Some(report_dir) = report_dir {
        config.report_dir = report_dir;
    }

    let summary = grade(&config, no_submit)?;

    for issue in &summary.issues {
        eprintln!("{}", format!("issue: {issue}").yellow());
    }

    let overall = summary.overall();
    if overall.is_pass() {
        println!("{}", format!("overall: {overall}").green());
    } else {
        println!("{}", format!("overall: {overall}").red());
    }

    if strict && !overall.is_pass() {
        std::process::exit(1);
    }
    Ok(())
}

fn clean(report_dir: &Path) -> Result<()> {
    let removed = clear_report_files(report_dir)?;
    if removed.is_empty() {
        println!("nothing to remove");
    }
    for path in removed {
        println!("Deleted: {}", path.display());
    }
    Ok(())
}

fn inspect(file: &Path, css: bool) -> Result<()> {
    let doc = DocumentView::from_file(file)?;

    println!("=== Elements ===");
    for name in doc.tag_names() {
        println!("{name}: {}", doc.elements_by_tag(&name).len());
    }

    if css {
        println!("\n=== Head stylesheet ===");
        match doc.head_style_text() {
            Some(text) if text.trim().is_empty() => println!("(empty)"),
            Some(text) => println!("{text}"),
            None => println!("(none)"),
        }
    }

    Ok(())
}
