use std::collections::BTreeMap;

use lakeseed_core::TabularRecord;

use super::TabularSink;
use crate::errors::GenerationError;

/// A rendered table held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Keeps rendered tables in memory instead of writing files.
///
/// Byte counts are the size the table would have as CSV (header included), so
/// reports from a memory run match those of a directory run.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: BTreeMap<String, MemoryTable>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, name: &str) -> Option<&MemoryTable> {
        self.tables.get(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl TabularSink for MemorySink {
    fn write_table<R: TabularRecord>(&mut self, rows: &[R]) -> Result<u64, GenerationError> {
        let rows: Vec<Vec<String>> = rows.iter().map(R::to_fields).collect();
        let bytes = encoded_len(R::COLUMNS, &rows)?;
        let table = MemoryTable {
            columns: R::COLUMNS.iter().map(|col| col.to_string()).collect(),
            rows,
        };
        self.tables.insert(R::TABLE.to_string(), table);
        Ok(bytes)
    }
}

fn encoded_len(columns: &[&str], rows: &[Vec<String>]) -> Result<u64, GenerationError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let buffer = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(buffer.len() as u64)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lakeseed_core::{Region, Store, StoreId, StoreType};

    use super::*;
    use crate::output::CsvDirectorySink;

    fn store(id: u32, city: &str) -> Store {
        Store {
            store_id: StoreId::new(id),
            store_name: format!("{city} Retail Hub"),
            city: city.to_string(),
            region: Region::North,
            store_type: StoreType::Express,
            opened_date: NaiveDate::from_ymd_opt(2019, 6, 30).expect("valid date"),
        }
    }

    #[test]
    fn byte_count_matches_csv_sink() {
        let stores = [store(1, "Delhi"), store(2, "Dubai, UAE")];

        let mut memory = MemorySink::new();
        let memory_bytes = memory.write_table(&stores).expect("memory write");

        let dir = std::env::temp_dir().join(format!("lakeseed_memory_{}", uuid::Uuid::new_v4()));
        let mut csv_sink = CsvDirectorySink::create(&dir).expect("create sink");
        let csv_bytes = csv_sink.write_table(&stores).expect("csv write");

        assert_eq!(memory_bytes, csv_bytes);
        let table = memory.table("stores").expect("stores table");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.columns[0], "store_id");
        assert_eq!(table.rows[1][2], "Dubai, UAE");
    }
}
