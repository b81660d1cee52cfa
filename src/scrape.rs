//! Cell scraping.
//!
//! Walks the `<tr>` rows of one table and collects the trimmed text of the
//! cells of a single kind, header (`th`) or data (`td`).

use crate::dom::HtmlElement;

/// Tag name of header cells.
pub const HEADER_CELL: &str = "th";

/// Tag name of data cells.
pub const DATA_CELL: &str = "td";

/// Cell texts of one `<tr>` for one cell kind.
pub type RawRow = Vec<String>;

/// Rows scraped for one cell kind, plus the widest row seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedBlock {
    /// One entry per `<tr>`, including rows with no matching cells.
    pub rows: Vec<RawRow>,
    /// Maximum row length, `0` when there are no rows.
    pub max_width: usize,
}

impl ScrapedBlock {
    /// Build a block from rows, computing `max_width`.
    #[must_use]
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        let max_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, max_width }
    }

    /// Keep only the rows exactly `max_width` cells wide.
    #[must_use]
    pub fn into_uniform_rows(self) -> Vec<RawRow> {
        let width = self.max_width;
        self.rows.into_iter().filter(|row| row.len() == width).collect()
    }
}

/// Scrape the cells matching `tag` from every row of `table`.
///
/// Rows without a matching cell still produce an empty [`RawRow`] so the
/// header and data blocks of the same table stay aligned row for row.
#[must_use]
pub fn scrape_tag<E: HtmlElement>(table: &E, tag: &str) -> ScrapedBlock {
    let rows = table
        .find_by_tag("tr")
        .iter()
        .map(|tr| {
            tr.find_by_tag(tag)
                .iter()
                // Unicode trim: a cell holding only `&nbsp;` comes out empty.
                .map(|cell| cell.text().trim().to_string())
                .collect()
        })
        .collect();

    ScrapedBlock::from_rows(rows)
}
