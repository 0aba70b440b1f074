//! # Parsed SVG Markup
//!
//! [`SvgDocument`] wraps a `roxmltree` document and exposes only what the
//! icon rules need: the root tag name and root attribute lookup. The rules
//! never walk the tree themselves.

/// A well-formed XML document expected to hold an SVG icon.
///
/// Borrows the markup it was parsed from.
#[derive(Debug)]
pub struct SvgDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> SvgDocument<'input> {
    /// Parse markup into a document.
    ///
    /// DTDs are allowed, since exported SVG files often carry a DOCTYPE.
    /// Anything else that is not well-formed XML (unclosed tags, stray
    /// text outside the root, empty input) is an error.
    pub fn parse(markup: &'input str) -> Result<Self, roxmltree::Error> {
        let mut opts = roxmltree::ParsingOptions::default();
        opts.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(markup, opts)?;
        Ok(Self { doc })
    }

    /// Qualified name of the root element as written, prefix included
    /// (`svg`, `s:svg`).
    pub fn root_tag(&self) -> &str {
        let root = self.doc.root_element();
        let start = root.range().start + 1;
        self.doc
            .input_text()
            .get(start..)
            .and_then(|rest| {
                rest.split(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
                    .next()
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| root.tag_name().name())
    }

    /// Returns true if the root element is exactly `<svg>`, unprefixed.
    pub fn is_svg(&self) -> bool {
        self.root_tag() == "svg"
    }

    /// Value of an un-namespaced attribute on the root element.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.doc.root_element().attribute(name)
    }

    /// Returns true if the root element carries the attribute, whatever its value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.doc.root_element().has_attribute(name)
    }
}
