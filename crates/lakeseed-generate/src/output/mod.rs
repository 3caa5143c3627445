//! Tabular sinks the engine hands each materialized pool to.

pub mod csv;
pub mod memory;

use lakeseed_core::TabularRecord;

use crate::errors::GenerationError;

pub use self::csv::{CsvDirectorySink, write_table_csv};
pub use self::memory::{MemorySink, MemoryTable};

/// Accepts an ordered sequence of uniform records and persists it.
///
/// Writing a table replaces whatever the sink held for it before. Failures
/// are returned unchanged; sinks do not retry.
pub trait TabularSink {
    /// Returns the number of bytes written.
    fn write_table<R: TabularRecord>(&mut self, rows: &[R]) -> Result<u64, GenerationError>;
}
