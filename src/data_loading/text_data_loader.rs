use super::data_loader::{ColumnSelection, DataLoader, RowCollector};
use crate::error::{ElasticNetError, Result};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Plain delimited-text loader, always available.
///
/// Splits every non-blank line on the delimiter without any quoting rules,
/// which is enough for purely numeric files.
pub struct TextDataLoader {
    delimiter: char,
}

impl TextDataLoader {
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl DataLoader for TextDataLoader {
    fn get_name(&self) -> &str {
        "Text Data Loader"
    }

    fn load_from_string(&self, data: &str, columns: &ColumnSelection) -> Result<DenseMatrix<f64>> {
        self.validate_format(data)?;
        let data = data.strip_prefix('\u{feff}').unwrap_or(data);

        let mut collector = RowCollector::new(columns);
        for (idx, line) in data.lines().enumerate() {
            collector.push(idx + 1, line.split(self.delimiter))?;
        }

        collector.finish()
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        if data.trim().is_empty() {
            return Err(ElasticNetError::EmptyData("text data is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for TextDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::arrays::Array;

    #[test]
    fn reads_selected_columns_with_crlf() {
        let data = "1,2,3\r\n4,5,6\r\n";
        let m = TextDataLoader::new()
            .load_from_string(data, &ColumnSelection::new(vec![0, 2]).unwrap())
            .unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(*m.get((1, 1)), 6.0);
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let err = TextDataLoader::new()
            .load_from_string("1,2\n3,4\n", &ColumnSelection::range(0..3).unwrap())
            .unwrap_err();
        assert!(matches!(err, ElasticNetError::Parse { line: 1, column: 2, .. }));
    }

    #[test]
    fn empty_field_is_not_a_number() {
        let err = TextDataLoader::new()
            .load_from_string("1,,3\n", &ColumnSelection::range(0..3).unwrap())
            .unwrap_err();
        assert!(matches!(err, ElasticNetError::Parse { column: 1, .. }));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let m = TextDataLoader::new()
            .load_from_string("\u{feff}1,2\n3,4\n", &ColumnSelection::range(0..2).unwrap())
            .unwrap();
        assert_eq!(*m.get((0, 0)), 1.0);
    }

    #[test]
    fn tab_delimited() {
        let m = TextDataLoader::new()
            .with_delimiter('\t')
            .load_from_string("1\t-2e-3\n", &ColumnSelection::range(1..2).unwrap())
            .unwrap();
        assert_eq!(*m.get((0, 0)), -0.002);
    }
}
