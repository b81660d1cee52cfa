//! Error types for rs-html-tables.
//!
//! Malformed tables are not errors: they are dropped during import (see
//! [`crate::table::Rejection`]). The variants here cover the surrounding
//! steps that can genuinely fail, loading a document and building a frame.

use std::path::PathBuf;

use crate::frame::FrameError;

/// Error type for table import operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a local HTML document failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The location is neither a usable path nor a parseable URL.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// The location uses a scheme this crate does not load (only `file`).
    #[error("unsupported URL scheme `{0}`; fetch the page yourself and call read_html_bytes")]
    UnsupportedScheme(String),

    /// The resolved table could not be turned into a data frame.
    #[error("data frame construction failed: {0}")]
    Frame(#[from] FrameError),
}

/// Result type alias for table import operations.
pub type Result<T> = std::result::Result<T, Error>;
