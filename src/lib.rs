//! # rs-html-tables
//!
//! Import the tables of an HTML page as labelled data frames.
//!
//! Every `<table>` in the document is scraped into header (`th`) and data
//! (`td`) rows. The header cells are split into column labels and, for tables
//! whose rows lead with a `<th>`, row labels. Tables whose shape does not add
//! up are skipped rather than reported as errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_html_tables::read_html;
//!
//! let html = r#"<table>
//!     <tr><th>Company</th><th>Price</th></tr>
//!     <tr><td>Sun Pharma</td><td>502.60</td></tr>
//!     <tr><td>ITC</td><td>315.85</td></tr>
//! </table>"#;
//!
//! let frames = read_html(html)?;
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0].shape(), (2, 2));
//! assert_eq!(frames[0].columns(), ["Company", "Price"]);
//! # Ok::<(), rs_html_tables::Error>(())
//! ```
//!
//! ## Limits
//!
//! Only markup present in the page is considered: tables filled in by
//! scripts, and anything implied by layout or styling, are invisible here.

mod error;
mod options;

/// HTML backend capabilities and the `dom_query` implementation.
pub mod dom;

/// Cell text scraping per row.
pub mod scrape;

/// Column-label and row-label recovery from header cells.
pub mod headers;

/// Structural parsing and validation of one table.
pub mod table;

/// User overrides for labels and names.
pub mod overrides;

/// Table selection by markup substring.
pub mod selector;

/// The data frame produced for each table.
pub mod frame;

/// Document-level import pipeline.
pub mod import;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Location resolution and local document loading.
pub mod source;

// Public API - re-exports
pub use error::{Error, Result};
pub use frame::{DataFrame, FrameError};
pub use options::Options;
pub use overrides::Overrides;
pub use table::{NormalizedTable, Rejection};

/// Imports every table of an HTML document using default options.
#[allow(clippy::missing_errors_doc)]
pub fn read_html(html: &str) -> Result<Vec<DataFrame>> {
    read_html_with_options(html, &Options::default())
}

/// Imports the tables of an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_html_tables::{read_html_with_options, Options};
///
/// let html = r#"
///     <table><tr><th>x</th></tr><tr><td>1</td></tr></table>
///     <table><tr><th>Company</th></tr><tr><td>Sun Pharma</td></tr></table>"#;
/// let options = Options::default().with_pattern("Sun Pharma").with_name("shares");
///
/// let frames = read_html_with_options(html, &options)?;
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].name(), Some("shares"));
/// # Ok::<(), rs_html_tables::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn read_html_with_options(html: &str, options: &Options) -> Result<Vec<DataFrame>> {
    let doc = dom::parse(html);
    import::import_all(&doc, options)
}

/// Imports the tables of raw HTML bytes, decoding the declared charset first.
///
/// Falls back to UTF-8 when the page declares no charset; invalid sequences
/// are replaced with U+FFFD.
#[allow(clippy::missing_errors_doc)]
pub fn read_html_bytes(html: &[u8], options: &Options) -> Result<Vec<DataFrame>> {
    let html = encoding::transcode_to_utf8(html);
    read_html_with_options(&html, options)
}

/// Imports the tables of the document at a local path or `file://` URL.
#[allow(clippy::missing_errors_doc)]
pub fn read_html_from(location: &str, options: &Options) -> Result<Vec<DataFrame>> {
    let bytes = source::load_html(location)?;
    read_html_bytes(&bytes, options)
}
