use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::integrity::IntegrityReport;

/// Options for the generation engine.
///
/// Volumes and distributions are fixed; only the run mechanics are options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the four CSV files (and the report) are written to.
    pub out_dir: PathBuf,
    /// Seed every stage generator is derived from.
    pub seed: u64,
    /// Generate transaction rows on the rayon thread pool.
    pub parallel: bool,
    /// Write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            seed: 42,
            parallel: true,
            write_report: true,
        }
    }
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_generated: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub integrity: IntegrityReport,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
            integrity: IntegrityReport::default(),
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written += table.bytes_written;
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }
}
