use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use tvforge_core::Dataset;
use tvforge_generate::{
    DatasetGenerator, ExportError, GenerateOptions, GenerationError, OutputFormat, export_dataset,
    read_csv_dataset,
};
use tvforge_report::{ReportError, compute_summary, render_all_charts, render_summary};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "tvforge",
    version,
    about = "Synthetic television product dataset generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset and export it.
    Generate(GenerateArgs),
    /// Summarize and chart a previously exported CSV dataset.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of rows to generate.
    #[arg(long, default_value_t = 1000)]
    rows: u64,
    /// Output base name; the format extension is appended when missing.
    #[arg(long, default_value = "television_data")]
    output: PathBuf,
    /// Output format: csv, json, or xlsx.
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    format: OutputFormat,
    /// PRNG seed; reruns with the same seed produce identical datasets.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of sample rows printed after generation.
    #[arg(long, default_value_t = 5)]
    sample: usize,
    /// Write the generation report (rows, seed, timings) next to the output.
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// CSV dataset to load.
    #[arg(long, default_value = "television_data.csv")]
    input: PathBuf,
    /// Directory for the summary and chart files.
    #[arg(long, default_value = "reports")]
    out_dir: PathBuf,
    /// Render charts only.
    #[arg(long, default_value_t = false)]
    charts: bool,
    /// Write the text summary only.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Report(args) => run_report(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    println!("Generating {} television records...", args.rows);

    let options = GenerateOptions {
        rows: args.rows,
        seed: args.seed,
        strict: true,
    };
    let outcome = DatasetGenerator::new(options).run()?;

    print_sample(&outcome.dataset, args.sample);

    let path = export_dataset(&outcome.dataset, &args.output, args.format)?;
    if args.report {
        let report_path = path.with_extension("report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&outcome.report)?)?;
        println!("Generation report written to {}", report_path.display());
    }

    println!(
        "Generated {} records (seed {}) and saved them to {}",
        outcome.report.rows_generated,
        outcome.report.seed,
        path.display()
    );
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let dataset = read_csv_dataset(&args.input)?;
    println!(
        "Loaded {} records from {}",
        dataset.len(),
        args.input.display()
    );
    std::fs::create_dir_all(&args.out_dir)?;

    // With no selection flags, produce both outputs.
    let all = !args.charts && !args.summary;

    if args.summary || all {
        let summary = compute_summary(&dataset);
        let path = args.out_dir.join("summary.txt");
        std::fs::write(&path, render_summary(&summary))?;
        println!("Summary written to {}", path.display());
    }

    if args.charts || all {
        let paths = render_all_charts(&dataset, &args.out_dir)?;
        for path in paths {
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

fn print_sample(dataset: &Dataset, limit: usize) {
    if limit == 0 || dataset.is_empty() {
        return;
    }

    println!("\nSample of generated records:");
    println!(
        "{:<10} {:<10} {:<18} {:<12} {:>4}  {:<8} {:>10}",
        "SKU", "BRAND", "MODEL", "TECHNOLOGY", "SIZE", "RES", "PRICE"
    );
    for record in dataset.iter().take(limit) {
        println!(
            "{:<10} {:<10} {:<18} {:<12} {:>4}  {:<8} {:>10.2}",
            record.product_sku,
            record.brand.as_str(),
            record.model,
            record.display_technology.as_str(),
            record.screen_size_inches,
            record.resolution.as_str(),
            record.price_usd
        );
    }
    println!();
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value
        .parse::<OutputFormat>()
        .map_err(|err| err.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
