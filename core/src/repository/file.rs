use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CpvError, Result};
use crate::model::record::Record;
use crate::repository::traits::RecordSource;

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    file_path: PathBuf,
}

impl CsvFileSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn csv_error(&self, source: csv::Error) -> CpvError {
        CpvError::Csv {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl RecordSource for CsvFileSource {
    fn read_records(&self) -> Result<Vec<Record>> {
        debug!(path = %self.file_path.display(), "reading CSV");

        let file = File::open(&self.file_path).map_err(|source| CpvError::Io {
            path: self.file_path.clone(),
            source,
        })?;

        // Flexible widths: short rows come back as records and are rejected
        // by the loaders instead of failing the whole file.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        debug!(header = ?header.iter().collect::<Vec<_>>(), "CSV header");

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result.map_err(|e| self.csv_error(e))?;
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            records.push(Record::new(line, row.iter().map(str::to_string).collect()));
        }

        Ok(records)
    }
}
