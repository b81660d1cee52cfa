//! Structural parsing of a single `<table>`.
//!
//! Scrapes header and data cells, keeps only full-width data rows, splits the
//! headers into column and row labels, and checks that the pieces line up.
//! Tables that fail the checks come back as a [`Rejection`]; the importer
//! skips them instead of failing the whole document.

use std::fmt;

use crate::dom::HtmlElement;
use crate::headers::partition_headers;
use crate::scrape::{scrape_tag, RawRow, ScrapedBlock, DATA_CELL, HEADER_CELL};

/// A table whose data and labels passed the structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    /// Data rows, all of the same width, with all-empty rows removed.
    pub data: Vec<RawRow>,
    /// Column labels; never empty.
    pub column_labels: Vec<String>,
    /// Row labels, one per data row when present.
    pub row_labels: Option<Vec<String>>,
}

/// Why a table was left out of the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The header cells are narrower than the data rows.
    HeadersNarrowerThanData {
        /// Widest header row.
        header_width: usize,
        /// Widest data row.
        data_width: usize,
    },
    /// No header row spans the full header width (the table has no rows).
    NoLabelRow,
    /// The column-label row contributed no labels.
    NoColumnLabels,
    /// Row labels were found but do not pair up with the data rows.
    RowLabelMismatch {
        /// Number of row labels.
        labels: usize,
        /// Number of full-width data rows.
        rows: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeadersNarrowerThanData { header_width, data_width } => write!(
                f,
                "header width {header_width} is narrower than data width {data_width}"
            ),
            Self::NoLabelRow => f.write_str("no header row spans the header width"),
            Self::NoColumnLabels => f.write_str("no column labels"),
            Self::RowLabelMismatch { labels, rows } => {
                write!(f, "{labels} row labels for {rows} data rows")
            }
        }
    }
}

/// Parse one table element.
pub fn parse_table<E: HtmlElement>(table: &E) -> Result<NormalizedTable, Rejection> {
    let headers = scrape_tag(table, HEADER_CELL);
    let data = scrape_tag(table, DATA_CELL);
    tracing::trace!(
        header_rows = headers.rows.len(),
        header_width = headers.max_width,
        data_rows = data.rows.len(),
        data_width = data.max_width,
        "scraped table"
    );
    check_table(headers, data)
}

/// Structural checks over already scraped header and data blocks.
pub fn check_table(
    headers: ScrapedBlock,
    data: ScrapedBlock,
) -> Result<NormalizedTable, Rejection> {
    let header_width = headers.max_width;
    let data_width = data.max_width;
    let data = data.into_uniform_rows();

    if header_width < data_width {
        return Err(Rejection::HeadersNarrowerThanData { header_width, data_width });
    }

    let parts =
        partition_headers(&headers.rows, data_width, header_width).ok_or(Rejection::NoLabelRow)?;

    if let Some(labels) = &parts.row_labels {
        if labels.len() != data.len() {
            return Err(Rejection::RowLabelMismatch {
                labels: labels.len(),
                rows: data.len(),
            });
        }
    }
    if parts.column_labels.is_empty() {
        return Err(Rejection::NoColumnLabels);
    }

    let (data, row_labels) = drop_empty_rows(data, parts.row_labels);
    Ok(NormalizedTable {
        data,
        column_labels: parts.column_labels,
        row_labels,
    })
}

/// Remove rows whose cells are all empty, along with their row labels.
fn drop_empty_rows(
    data: Vec<RawRow>,
    row_labels: Option<Vec<String>>,
) -> (Vec<RawRow>, Option<Vec<String>>) {
    let is_blank = |row: &RawRow| row.iter().all(String::is_empty);

    match row_labels {
        None => (data.into_iter().filter(|row| !is_blank(row)).collect(), None),
        Some(labels) => {
            let (data, labels): (Vec<_>, Vec<_>) = data
                .into_iter()
                .zip(labels)
                .filter(|(row, _)| !is_blank(row))
                .unzip();
            (data, Some(labels))
        }
    }
}
