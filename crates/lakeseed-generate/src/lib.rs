//! Retail dataset generation for lakeseed.
//!
//! Builds the customer, product and store pools, samples the transaction
//! fact table against them, and hands every pool to a tabular sink (CSV
//! files by default). Output is deterministic for a given seed.

pub mod customers;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod integrity;
pub mod model;
pub mod output;
pub mod products;
pub mod sampling;
pub mod seeds;
pub mod stores;
pub mod transactions;

pub use dataset::Dataset;
pub use engine::{GenerationEngine, GenerationResult, REPORT_FILE};
pub use errors::GenerationError;
pub use integrity::{IntegrityReport, audit};
pub use model::{GenerateOptions, GenerationReport, TableReport};
pub use output::{CsvDirectorySink, MemorySink, TabularSink};
pub use transactions::TransactionGenerator;
