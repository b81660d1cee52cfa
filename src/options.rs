//! Configuration options for table import.
//!
//! The `Options` struct selects which tables are imported and lets callers
//! replace the scraped labels or name of every resulting frame.

use crate::overrides::Overrides;

/// Configuration options for table import.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// to import every structurally valid table with its scraped labels.
///
/// # Example
///
/// ```rust
/// use rs_html_tables::Options;
///
/// // Only tables whose markup mentions "Sun Pharma", named for display.
/// let options = Options::default()
///     .with_pattern("Sun Pharma")
///     .with_name("Share Market Analysis");
/// assert_eq!(options.pattern.as_deref(), Some("Sun Pharma"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep only tables whose serialized markup contains this substring.
    ///
    /// Default: `None` (every table)
    pub pattern: Option<String>,

    /// Name given to every imported frame.
    ///
    /// Default: `None`
    pub name: Option<String>,

    /// Column labels replacing the scraped ones.
    ///
    /// Default: `None`
    pub order: Option<Vec<String>>,

    /// Row labels replacing the scraped ones.
    ///
    /// Default: `None`
    pub index: Option<Vec<String>>,
}

impl Options {
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_index<I, S>(mut self, index: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index = Some(index.into_iter().map(Into::into).collect());
        self
    }

    /// The user overrides carried by these options.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            name: self.name.clone(),
            column_labels: self.order.clone(),
            row_labels: self.index.clone(),
        }
    }
}
