use super::data_loader::{ColumnSelection, DataLoader, RowCollector};
use crate::error::{ElasticNetError, Result};
use csv::ReaderBuilder;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// CSV Data Loader - Strategy implementation on top of the `csv` crate
pub struct CsvDataLoader {
    delimiter: u8,
}

impl CsvDataLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load_from_string(&self, data: &str, columns: &ColumnSelection) -> Result<DenseMatrix<f64>> {
        self.validate_format(data)?;

        // Width is checked by the collector so ragged rows report the same
        // error as the text loader.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(data.as_bytes());

        let mut collector = RowCollector::new(columns);
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            collector.push(line, record.iter())?;
        }

        collector.finish()
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        if data.trim().is_empty() {
            return Err(ElasticNetError::EmptyData("CSV data is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}
