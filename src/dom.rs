//! DOM capability layer.
//!
//! The import core only needs three things from an HTML backend: find
//! descendants by tag name, read an element's text, and serialize an element
//! back to markup. [`HtmlDocument`] and [`HtmlElement`] name exactly that, and
//! the `dom_query` implementations below are the default backend.

pub use dom_query::{Document, Selection};

/// An element of a parsed HTML tree.
pub trait HtmlElement: Sized {
    /// All descendant elements with the given tag name, in document order.
    ///
    /// An unknown or invalid tag yields an empty vector.
    fn find_by_tag(&self, tag: &str) -> Vec<Self>;

    /// Text content of the element and its descendants, untrimmed.
    fn text(&self) -> String;

    /// The element serialized as markup, including its own tags.
    fn outer_html(&self) -> String;
}

/// A parsed HTML document.
pub trait HtmlDocument {
    /// Element handle borrowed from the document.
    type Element<'a>: HtmlElement
    where
        Self: 'a;

    /// All elements in the document with the given tag name, in document order.
    fn find_by_tag(&self, tag: &str) -> Vec<Self::Element<'_>>;
}

impl HtmlDocument for Document {
    type Element<'a> = Selection<'a>;

    fn find_by_tag(&self, tag: &str) -> Vec<Selection<'_>> {
        self.try_select(tag)
            .map(|sel| sel.iter().collect())
            .unwrap_or_default()
    }
}

impl<'a> HtmlElement for Selection<'a> {
    fn find_by_tag(&self, tag: &str) -> Vec<Selection<'a>> {
        self.try_select(tag)
            .map(|sel| sel.iter().collect())
            .unwrap_or_default()
    }

    #[inline]
    fn text(&self) -> String {
        Selection::text(self).to_string()
    }

    #[inline]
    fn outer_html(&self) -> String {
        self.html().to_string()
    }
}

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
