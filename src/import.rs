//! Document-level import pipeline.
//!
//! Every `<table>` in the document goes through the same steps, in document
//! order: structural parse, rejection of malformed tables, pattern selection,
//! override resolution, frame construction.

use tracing::debug;

use crate::dom::HtmlDocument;
use crate::error::Result;
use crate::frame::{build, DataFrame};
use crate::options::Options;
use crate::overrides::{resolve, TableSpec};
use crate::selector::matches;
use crate::table::{parse_table, NormalizedTable};

/// Parse and select the tables of `doc`, without building frames.
#[must_use]
pub fn parse_all<D: HtmlDocument>(doc: &D, pattern: Option<&str>) -> Vec<NormalizedTable> {
    let tables = doc.find_by_tag("table");
    let total = tables.len();

    let mut parsed = 0usize;
    let mut selected = Vec::new();
    for (ordinal, element) in tables.iter().enumerate() {
        let table = match parse_table(element) {
            Ok(table) => table,
            Err(reason) => {
                debug!(table = ordinal, %reason, "skipping table");
                continue;
            }
        };
        parsed += 1;

        if matches(element, pattern) {
            selected.push(table);
        }
    }

    debug!(
        total,
        parsed,
        selected = selected.len(),
        "parsed document tables"
    );
    selected
}

/// Import every usable table of `doc` as a [`DataFrame`].
///
/// An empty vector is a normal outcome. Errors come only from frame
/// construction, when overrides do not fit a table's shape.
pub fn import_all<D: HtmlDocument>(doc: &D, options: &Options) -> Result<Vec<DataFrame>> {
    let overrides = options.overrides();

    parse_all(doc, options.pattern.as_deref())
        .into_iter()
        .map(|table| {
            let mut spec = TableSpec::from(table);
            if !overrides.is_empty() {
                spec = resolve(spec, &overrides);
            }
            build(spec).map_err(Into::into)
        })
        .collect()
}
