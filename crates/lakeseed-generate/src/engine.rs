use std::path::PathBuf;
use std::time::{Duration, Instant};

use lakeseed_core::{Customer, Product, Store, TabularRecord, Transaction};
use tracing::{info, warn};

use crate::customers::generate_customers;
use crate::dataset::Dataset;
use crate::errors::GenerationError;
use crate::integrity::audit;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::{CsvDirectorySink, TabularSink};
use crate::products::generate_products;
use crate::sampling::{hash_seed, stage_rng};
use crate::seeds::{BRANDS, CUSTOMER_COUNT, STORE_CITIES, TAXONOMY, TRANSACTION_COUNT};
use crate::stores::generate_stores;
use crate::transactions::TransactionGenerator;

/// File name of the run report written next to the CSV files.
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the retail dataset.
///
/// Stages run in dependency order: customers, products and stores are leaf
/// pools; transactions sample from all three. Every pool is materialized
/// before anything is handed to the sink.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    transaction_count: usize,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            transaction_count: TRANSACTION_COUNT,
        }
    }

    #[cfg(test)]
    fn with_transaction_count(mut self, count: usize) -> Self {
        self.transaction_count = count;
        self
    }

    /// Generate the dataset into `out_dir`, replacing any previous output.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let mut sink = CsvDirectorySink::create(&self.options.out_dir)?;
        let (dataset, report) = self.run_with_sink(&mut sink)?;

        if self.options.write_report {
            let report_path = sink.dir().join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "report written");
        }

        Ok(GenerationResult {
            out_dir: sink.dir().to_path_buf(),
            dataset,
            report,
        })
    }

    /// Generate all pools and hand them to `sink` in stage order.
    pub fn run_with_sink<S: TabularSink>(
        &self,
        sink: &mut S,
    ) -> Result<(Dataset, GenerationReport), GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed;

        info!(
            run_id = %run_id,
            seed,
            parallel = self.options.parallel,
            "generation started"
        );

        let customers = timed_stage(Customer::TABLE, || {
            let mut rng = stage_rng(seed, Customer::TABLE);
            Ok(generate_customers(CUSTOMER_COUNT, &mut rng))
        })?;
        let products = timed_stage(Product::TABLE, || {
            let mut rng = stage_rng(seed, Product::TABLE);
            Ok(generate_products(TAXONOMY, BRANDS, &mut rng))
        })?;
        let stores = timed_stage(Store::TABLE, || {
            let mut rng = stage_rng(seed, Store::TABLE);
            Ok(generate_stores(STORE_CITIES, &mut rng))
        })?;
        let transactions = timed_stage(Transaction::TABLE, || {
            let generator = TransactionGenerator::new(
                &customers.rows,
                &products.rows,
                &stores.rows,
                hash_seed(seed, Transaction::TABLE),
            )?;
            Ok(generator.generate(self.transaction_count, self.options.parallel))
        })?;

        let mut report = GenerationReport::new(run_id.clone(), seed);
        write_stage(sink, &customers, &mut report)?;
        write_stage(sink, &products, &mut report)?;
        write_stage(sink, &stores, &mut report)?;
        write_stage(sink, &transactions, &mut report)?;

        let dataset = Dataset {
            customers: customers.rows,
            products: products.rows,
            stores: stores.rows,
            transactions: transactions.rows,
        };

        report.integrity = audit(&dataset);
        if !report.integrity.is_clean() {
            warn!(
                run_id = %run_id,
                violations = report.integrity.violations(),
                "integrity audit found violations"
            );
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok((dataset, report))
    }
}

struct Stage<T> {
    rows: Vec<T>,
    elapsed: Duration,
}

fn timed_stage<T>(
    table: &'static str,
    build: impl FnOnce() -> Result<Vec<T>, GenerationError>,
) -> Result<Stage<T>, GenerationError> {
    info!(table, "generating table");
    let start = Instant::now();
    let rows = build()?;
    let elapsed = start.elapsed();
    info!(
        table,
        rows_generated = rows.len(),
        duration_ms = elapsed.as_millis() as u64,
        "table generated"
    );
    Ok(Stage { rows, elapsed })
}

fn write_stage<S: TabularSink, R: TabularRecord>(
    sink: &mut S,
    stage: &Stage<R>,
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let start = Instant::now();
    let bytes_written = sink.write_table(&stage.rows)?;
    let duration = stage.elapsed + start.elapsed();

    info!(
        table = R::TABLE,
        rows = stage.rows.len(),
        bytes_written,
        "table written"
    );

    report.record_table(TableReport {
        table: R::TABLE.to_string(),
        rows_generated: stage.rows.len() as u64,
        bytes_written,
        duration_ms: duration.as_millis() as u64,
    });
    Ok(())
}
