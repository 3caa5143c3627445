mod logging;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use lakeseed_generate::{GenerateOptions, GenerationEngine, GenerationError};
use thiserror::Error;

use logging::init_logging;
use settings::{Settings, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "lakeseed",
    version,
    about = "Generate the retail fixture dataset (customers, products, stores, transactions)"
)]
struct Cli {
    /// Directory the CSV files are written to (replaced in full on each run).
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Seed for every generation stage.
    #[arg(long)]
    seed: Option<u64>,
    /// Generate transactions on a single thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,
    /// Skip writing generation_report.json.
    #[arg(long, default_value_t = false)]
    no_report: bool,
    /// TOML settings file (defaults to ./lakeseed.toml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Append JSON log lines to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn resolve(&self, settings: &Settings) -> GenerateOptions {
        let mut options = GenerateOptions::default();
        settings.apply(&mut options);

        if let Some(out_dir) = &self.out_dir {
            options.out_dir = out_dir.clone();
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }
        if self.sequential {
            options.parallel = false;
        }
        if self.no_report {
            options.write_report = false;
        }
        options
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let log_file = cli.log_file.as_deref().or(settings.log_file.as_deref());
    init_logging(log_file)?;

    let options = cli.resolve(&settings);
    tracing::info!(
        event = "run_started",
        out_dir = %options.out_dir.display(),
        seed = options.seed
    );

    let result = GenerationEngine::new(options).run()?;

    for table in &result.report.tables {
        println!("{}.csv -> {} rows", table.table, table.rows_generated);
    }
    println!("out_dir={}", result.out_dir.display());

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = result.report.duration_ms
    );
    Ok(())
}
