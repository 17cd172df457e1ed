use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{ElasticNetError, Result};

/// Ordered set of zero-based column indices to extract from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ColumnSelection {
    indices: Vec<usize>,
}

impl ColumnSelection {
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        if indices.is_empty() {
            return Err(ElasticNetError::InvalidParameter(
                "column selection must not be empty".to_string(),
            ));
        }
        Ok(Self { indices })
    }

    /// Selects the half-open range `start..end`.
    pub fn range(range: Range<usize>) -> Result<Self> {
        Self::new(range.collect())
    }

    /// Infallible variant of [`ColumnSelection::range`] for built-in layouts.
    pub(crate) fn span(range: Range<usize>) -> Self {
        debug_assert!(!range.is_empty());
        Self {
            indices: range.collect(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl TryFrom<Vec<usize>> for ColumnSelection {
    type Error = ElasticNetError;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::new(indices)
    }
}

impl TryFrom<Range<usize>> for ColumnSelection {
    type Error = ElasticNetError;

    fn try_from(range: Range<usize>) -> Result<Self> {
        Self::range(range)
    }
}

impl From<ColumnSelection> for Vec<usize> {
    fn from(selection: ColumnSelection) -> Self {
        selection.indices
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.indices)
    }
}

/// Strategy pattern for reading numeric columns out of delimited text.
///
/// Every implementation must produce the same matrix for the same well-formed
/// input: no header, rows in file order, selected columns in selection order.
pub trait DataLoader {
    /// Loader name
    fn get_name(&self) -> &str;

    /// Parses delimited text that is already in memory.
    fn load_from_string(&self, data: &str, columns: &ColumnSelection) -> Result<DenseMatrix<f64>>;

    /// Validates the text before parsing
    fn validate_format(&self, data: &str) -> Result<()>;

    /// Reads `path` and parses it with [`DataLoader::load_from_string`].
    fn load(&self, path: &Path, columns: &ColumnSelection) -> Result<DenseMatrix<f64>> {
        let data = fs::read_to_string(path).map_err(|source| ElasticNetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "{}: loading columns {} from {}",
            self.get_name(),
            columns,
            path.display()
        );
        self.load_from_string(&data, columns)
    }
}

/// Collects parsed rows for both loader backends so that they share
/// one definition of a well-formed row.
pub(crate) struct RowCollector<'a> {
    columns: &'a ColumnSelection,
    width: Option<usize>,
    rows: Vec<Vec<f64>>,
}

impl<'a> RowCollector<'a> {
    pub(crate) fn new(columns: &'a ColumnSelection) -> Self {
        Self {
            columns,
            width: None,
            rows: Vec::new(),
        }
    }

    /// Adds one row; `line` is 1-based and only used for error reporting.
    /// A row whose fields are all blank counts as a blank line and is skipped.
    pub(crate) fn push<'f, I>(&mut self, line: usize, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'f str>,
    {
        let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
        if fields.iter().all(|f| f.is_empty()) {
            return Ok(());
        }

        match self.width {
            None => self.width = Some(fields.len()),
            Some(width) if width != fields.len() => {
                return Err(ElasticNetError::Parse {
                    line,
                    column: fields.len().min(width),
                    message: format!("row has {} fields, expected {}", fields.len(), width),
                });
            }
            Some(_) => {}
        }

        let row = self
            .columns
            .indices()
            .iter()
            .map(|&col| {
                let field = fields.get(col).ok_or_else(|| ElasticNetError::Parse {
                    line,
                    column: col,
                    message: format!("row has only {} fields", fields.len()),
                })?;
                parse_field(field, line, col)
            })
            .collect::<Result<Vec<f64>>>()?;

        self.rows.push(row);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<DenseMatrix<f64>> {
        if self.rows.is_empty() {
            return Err(ElasticNetError::EmptyData(
                "input contains no data rows".to_string(),
            ));
        }
        Ok(DenseMatrix::from_2d_vec(&self.rows)?)
    }
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| ElasticNetError::Parse {
        line,
        column,
        message: format!("value '{}' is not a number", field),
    })
}
