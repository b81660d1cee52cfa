//! Header partitioning.
//!
//! A table's header cells can carry two things at once: the column labels,
//! and (for tables whose rows start with a `<th>`) the row labels. The first
//! header row that spans the full header width is taken as the column-label
//! row; every header cell in the rows after it becomes a row label.

use crate::scrape::RawRow;

/// Column and row labels recovered from a table's header cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPartition {
    /// Trailing `data_width` cells of the column-label row.
    pub column_labels: Vec<String>,
    /// Header cells of all later rows, flattened. `None` when there are none.
    pub row_labels: Option<Vec<String>>,
}

/// Index of the first header row exactly `header_width` cells wide.
#[must_use]
pub fn find_label_row(header_rows: &[RawRow], header_width: usize) -> Option<usize> {
    header_rows.iter().position(|row| row.len() == header_width)
}

/// Split header rows into column labels and row labels.
///
/// Only meaningful when `header_width >= data_width`. Returns `None` when no
/// header row is exactly `header_width` wide (including the no-rows case);
/// callers treat that as a table without usable headers.
///
/// ```
/// use rs_html_tables::headers::partition_headers;
///
/// let rows = vec![
///     vec!["A".to_string(), "B".to_string(), "C".to_string()],
///     vec!["D".to_string(), "E".to_string()],
/// ];
/// let parts = partition_headers(&rows, 2, 3).unwrap();
/// assert_eq!(parts.column_labels, ["B", "C"]);
/// assert_eq!(parts.row_labels.unwrap(), ["D", "E"]);
/// ```
#[must_use]
pub fn partition_headers(
    header_rows: &[RawRow],
    data_width: usize,
    header_width: usize,
) -> Option<HeaderPartition> {
    let label_idx = find_label_row(header_rows, header_width)?;
    let label_row = &header_rows[label_idx];

    // Leading cells head the row-label column(s), not a data column.
    let skip = label_row.len().saturating_sub(data_width);
    let column_labels = label_row[skip..].to_vec();

    let row_labels: Vec<String> = header_rows[label_idx + 1..]
        .iter()
        .flatten()
        .cloned()
        .collect();

    Some(HeaderPartition {
        column_labels,
        row_labels: (!row_labels.is_empty()).then_some(row_labels),
    })
}
