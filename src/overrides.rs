//! User overrides for scraped labels and names.
//!
//! Each field the user sets replaces the scraped value for that field; the
//! fields left unset keep what the scraper found.

use crate::scrape::RawRow;
use crate::table::NormalizedTable;

/// Values a caller can force onto every imported table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Name given to the resulting frame.
    pub name: Option<String>,
    /// Column labels, replacing the scraped ones.
    pub column_labels: Option<Vec<String>>,
    /// Row labels, replacing the scraped ones.
    pub row_labels: Option<Vec<String>>,
}

impl Overrides {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.column_labels.is_none() && self.row_labels.is_none()
    }
}

/// Everything needed to build one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub data: Vec<RawRow>,
    pub column_labels: Option<Vec<String>>,
    pub row_labels: Option<Vec<String>>,
    pub name: Option<String>,
}

impl From<NormalizedTable> for TableSpec {
    fn from(table: NormalizedTable) -> Self {
        Self {
            data: table.data,
            column_labels: Some(table.column_labels),
            row_labels: table.row_labels,
            name: None,
        }
    }
}

/// Merge `overrides` over `scraped`, field by field.
#[must_use]
pub fn resolve(scraped: TableSpec, overrides: &Overrides) -> TableSpec {
    TableSpec {
        data: scraped.data,
        column_labels: overrides.column_labels.clone().or(scraped.column_labels),
        row_labels: overrides.row_labels.clone().or(scraped.row_labels),
        name: overrides.name.clone().or(scraped.name),
    }
}
