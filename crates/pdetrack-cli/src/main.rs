//! pdetrack CLI - PDE progress report generator
//!
//! Command-line interface for turning the follow-up workbook into the static
//! HTML report, and for inspecting category aggregates.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use pdetrack_core::{build_report, Renderer, Report, Status, UnmatchedRecord};
use pdetrack_render::{
    publish_readme, HtmlReportRenderer, ReportConfig, ReportConfigFile, SummaryRenderer,
};
use pdetrack_source::{read_file, SheetSelector};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdetrack")]
#[command(author, version, about = "PDE objectives progress report generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static HTML pages from a follow-up workbook
    Build {
        /// Input workbook (xlsx, xlsm, xlsb, xls, ods)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "docs")]
        output: PathBuf,

        /// Report configuration file (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Report title, overrides the config file
        #[arg(long)]
        title: Option<String>,

        /// "Last updated" date (YYYY-MM-DD), overrides the config file
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Sheet holding the table: 1-based position or name
        #[arg(long, default_value = "2")]
        sheet: SheetSelector,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,
    },

    /// Print the category aggregates of a follow-up workbook
    Summary {
        /// Input workbook (xlsx, xlsm, xlsb, xls, ods)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Sheet holding the table: 1-based position or name
        #[arg(long, default_value = "2")]
        sheet: SheetSelector,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            file,
            output,
            config,
            title,
            date,
            sheet,
            clean,
        } => {
            let options = BuildOptions {
                output,
                config,
                title,
                date,
                clean,
            };
            cmd_build(&file, &sheet, &options)
        }
        Commands::Summary {
            file,
            sheet,
            format,
        } => cmd_summary(&file, &sheet, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// ============================================================================
// build
// ============================================================================

struct BuildOptions {
    output: PathBuf,
    config: Option<PathBuf>,
    title: Option<String>,
    date: Option<NaiveDate>,
    clean: bool,
}

fn cmd_build(file: &Path, sheet: &SheetSelector, options: &BuildOptions) -> Result<()> {
    let config = resolve_config(options)?;
    let report = load_report(file, sheet)?;

    let pages = HtmlReportRenderer::new(config.clone())
        .render(&report)
        .context("Failed to render report")?;

    let out_dir = &options.output;
    if options.clean && out_dir.exists() {
        debug!(dir = %out_dir.display(), "removing previous output");
        fs::remove_dir_all(out_dir)
            .with_context(|| format!("Failed to clean {}", out_dir.display()))?;
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for page in &pages {
        let path = out_dir.join(&page.file_name);
        fs::write(&path, &page.html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(page = %page.id, path = %path.display(), "page written");
    }

    let readme = out_dir.join("README.md");
    fs::write(&readme, publish_readme(&config))
        .with_context(|| format!("Failed to write {}", readme.display()))?;

    info!(
        pages = pages.len(),
        objectives = report.item_count(),
        dir = %out_dir.display(),
        "report generated"
    );
    println!(
        "Generated {} pages in {} ({} objectives)",
        pages.len(),
        out_dir.display(),
        report.item_count()
    );
    Ok(())
}

/// Config file, then CLI overrides, on top of the built-in defaults
fn resolve_config(options: &BuildOptions) -> Result<ReportConfig> {
    let file = match &options.config {
        Some(path) => ReportConfigFile::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfigFile::default(),
    };

    let mut config = ReportConfig::from_file(file, Local::now().date_naive());
    if let Some(title) = &options.title {
        config = config.title(title.clone());
    }
    if let Some(date) = options.date {
        config = config.generated_date(date);
    }
    Ok(config)
}

fn load_report(file: &Path, sheet: &SheetSelector) -> Result<Report> {
    let rows = read_file(file, sheet)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let report = build_report(&rows);

    let unmatched = report.unmatched();
    if !unmatched.is_empty() {
        let rows: Vec<String> = unmatched.iter().map(|r| r.row.to_string()).collect();
        warn!(
            count = unmatched.len(),
            rows = %rows.join(", "),
            "rows with an unrecognized orientation were left out"
        );
    }
    Ok(report)
}

// ============================================================================
// summary
// ============================================================================

#[derive(Serialize)]
struct SummaryJson<'a> {
    objectives: usize,
    categories: Vec<CategoryJson>,
    unmatched: &'a [UnmatchedRecord],
}

#[derive(Serialize)]
struct CategoryJson {
    number: u8,
    label: &'static str,
    item_count: usize,
    mean_pct: i64,
    status: Status,
}

fn cmd_summary(file: &Path, sheet: &SheetSelector, format: SummaryFormat) -> Result<()> {
    let report = load_report(file, sheet)?;

    match format {
        SummaryFormat::Text => {
            let text = SummaryRenderer::new()
                .list_unmatched()
                .render(&report)
                .context("Failed to render summary")?;
            print!("{text}");
        }
        SummaryFormat::Json => {
            let summary = SummaryJson {
                objectives: report.item_count(),
                categories: report
                    .aggregates()
                    .map(|a| CategoryJson {
                        number: a.category.number(),
                        label: a.category.nav_label(),
                        item_count: a.item_count,
                        mean_pct: a.mean_pct,
                        status: a.status,
                    })
                    .collect(),
                unmatched: report.unmatched(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
