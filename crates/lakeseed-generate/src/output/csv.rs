use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use lakeseed_core::{Error as CoreError, TabularRecord};

use super::TabularSink;
use crate::errors::GenerationError;

/// Writes each table to `<dir>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    dir: PathBuf,
}

impl CsvDirectorySink {
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, GenerationError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }
}

impl TabularSink for CsvDirectorySink {
    fn write_table<R: TabularRecord>(&mut self, rows: &[R]) -> Result<u64, GenerationError> {
        write_table_csv(&self.table_path(R::TABLE), rows)
    }
}

/// Write a header plus one line per record, replacing `path` atomically.
///
/// Rows go to a temporary sibling first and are renamed into place, so a
/// previous file is replaced in full or left untouched.
pub fn write_table_csv<R: TabularRecord>(path: &Path, rows: &[R]) -> Result<u64, GenerationError> {
    let tmp_path = temp_path(path)?;
    let bytes = match write_records(&tmp_path, rows) {
        Ok(bytes) => bytes,
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err);
        }
    };
    std::fs::rename(&tmp_path, path)?;
    Ok(bytes)
}

fn write_records<R: TabularRecord>(path: &Path, rows: &[R]) -> Result<u64, GenerationError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(File::create(path)?));

    writer.write_record(R::COLUMNS)?;
    for row in rows {
        let record = row.to_fields();
        if record.len() != R::COLUMNS.len() {
            return Err(CoreError::InvalidRecord(format!(
                "{} row has {} fields, expected {}",
                R::TABLE,
                record.len(),
                R::COLUMNS.len()
            ))
            .into());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let buffered = writer.into_inner().map_err(|err| err.into_error())?;
    let file = buffered.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(file.metadata()?.len())
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| GenerationError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
