//! Loading HTML from a location string.
//!
//! Local paths and `file://` URLs are read from disk. Network fetching is left
//! to the caller: fetch the page with any HTTP client and hand the bytes to
//! [`crate::read_html_bytes`].

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Map a location string to a local path.
pub fn resolve_location(location: &str) -> Result<PathBuf> {
    let location = location.trim();
    if location.is_empty() {
        return Err(Error::InvalidLocation(location.to_string()));
    }
    if !location.contains("://") {
        return Ok(PathBuf::from(location));
    }

    let url = Url::parse(location).map_err(|e| Error::InvalidLocation(format!("{location}: {e}")))?;
    if url.scheme() != "file" {
        return Err(Error::UnsupportedScheme(url.scheme().to_string()));
    }
    url.to_file_path()
        .map_err(|()| Error::InvalidLocation(location.to_string()))
}

/// Read the raw bytes of the HTML document at `location`.
pub fn load_html(location: &str) -> Result<Vec<u8>> {
    let path = resolve_location(location)?;
    tracing::debug!(path = %path.display(), "reading html");
    std::fs::read(&path).map_err(|source| Error::Io { path, source })
}
