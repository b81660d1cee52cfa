//! Data frame built from an imported table.
//!
//! A deliberately small row-major container: string cells, a column order,
//! a row index and an optional name. It checks shape on construction and
//! nothing else.

use serde::Serialize;

use crate::overrides::TableSpec;
use crate::scrape::RawRow;

/// Shape errors raised while constructing a [`DataFrame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The row index does not have one label per row.
    #[error("index has {found} labels for {expected} rows")]
    IndexLength { expected: usize, found: usize },
}

/// Labelled two-dimensional table of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFrame {
    name: Option<String>,
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<RawRow>,
}

impl DataFrame {
    /// Build a frame from row-major data.
    ///
    /// Missing `order` defaults to `"0".."width"`; missing `index` defaults to
    /// `"0".."rows"`.
    pub fn from_rows(
        rows: Vec<RawRow>,
        order: Option<Vec<String>>,
        index: Option<Vec<String>>,
        name: Option<String>,
    ) -> Result<Self, FrameError> {
        let columns = order.unwrap_or_else(|| {
            let width = rows.first().map_or(0, Vec::len);
            positions(width)
        });

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != columns.len())
        {
            return Err(FrameError::WidthMismatch {
                row,
                expected: columns.len(),
                found,
            });
        }

        let index = index.unwrap_or_else(|| positions(rows.len()));
        if index.len() != rows.len() {
            return Err(FrameError::IndexLength {
                expected: rows.len(),
                found: index.len(),
            });
        }

        Ok(Self {
            name,
            columns,
            index,
            rows,
        })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Column labels, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row labels, in order.
    #[must_use]
    pub fn index(&self) -> &[String] {
        &self.index
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the first column labelled `label`, top to bottom.
    #[must_use]
    pub fn column(&self, label: &str) -> Option<Vec<&str>> {
        let col = self.columns.iter().position(|c| c == label)?;
        Some(self.rows.iter().map(|row| row[col].as_str()).collect())
    }

    /// Cells of the first row labelled `label`.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&[String]> {
        let row = self.index.iter().position(|r| r == label)?;
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Cell at row `row`, column `col` (positional).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Build the frame for a resolved table.
pub fn build(spec: TableSpec) -> Result<DataFrame, FrameError> {
    DataFrame::from_rows(spec.data, spec.column_labels, spec.row_labels, spec.name)
}

fn positions(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}
