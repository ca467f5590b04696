// Engine main entry point
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use engine::config::settings::EngineSettings;
use engine::data::csv_loader;
use engine::pipeline::{self, filter::FilterSpec};
use engine::report::{export, summary};

/// Procurement dashboard engine: runs the normalize/derive/aggregate
/// pipeline over a purchasing sheet and prints or exports the summary
/// report.
#[derive(Parser, Debug)]
#[command(name = "engine", version, about)]
struct Cli {
    /// Delimited-text procurement sheet (semicolon-separated by default).
    input: PathBuf,

    /// Optional JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restrict to these categories ("Sem Categoria" selects blank ones).
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Restrict to these billing statuses ("Sem Info" selects blank ones).
    #[arg(long = "billed")]
    billed: Vec<String>,

    /// Case-insensitive material-name search term.
    #[arg(long)]
    search: Option<String>,

    /// Write the two-column summary report to this path.
    #[arg(long)]
    summary_csv: Option<PathBuf>,

    /// Write the detailed row table to this path.
    #[arg(long)]
    detail_csv: Option<PathBuf>,

    /// Write the XLSX report (summary + detail sheets) to this path.
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Write timestamped snapshot files into this directory.
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => EngineSettings::from_file(path)?,
        None => EngineSettings::default(),
    };

    let records = csv_loader::load_raw_records(&cli.input, settings.delimiter_byte())?;
    let filter = FilterSpec {
        categories: (!cli.categories.is_empty()).then(|| cli.categories.clone()),
        billed: (!cli.billed.is_empty()).then(|| cli.billed.clone()),
        search: cli.search.clone(),
    };
    let rows = pipeline::run(&records, &filter);
    info!(rows = rows.len(), "Pipeline complete");

    let report = summary::build_summary(&rows);
    for (label, value) in &report.metrics {
        println!("{:<32} {}", label, summary::display_value(label, *value));
    }

    if let Some(path) = &cli.summary_csv {
        export::write_summary_csv(path, &report, settings.delimiter_byte())?;
    }
    if let Some(path) = &cli.detail_csv {
        csv_loader::write_rows_csv(path, &rows, settings.delimiter_byte())?;
    }
    if let Some(path) = &cli.xlsx {
        export::write_xlsx(path, &report, &rows, &settings)?;
    }
    if let Some(dir) = &cli.snapshot_dir {
        export::write_snapshots(dir, &report, &rows, &settings)?;
    }

    Ok(())
}
