//! Read-only document view for the Quoll checker.
//!
//! This crate adapts a parsed HTML tree (parsing is delegated to [`kuchiki`])
//! to the three accessors the checkers need:
//!
//! - elements queryable by tag name, in document order,
//! - attribute lookup per element,
//! - the text of `<style>` elements that are direct children of `<head>`.
//!
//! # Design
//!
//! Checkers never see the underlying tree. They receive owned
//! [`ElementData`] snapshots and plain strings, so the view stays the only
//! place that knows how the document was parsed. The view is immutable after
//! construction and all accessors are read-only; note that the backing tree
//! is reference-counted, so a view is confined to the thread that parsed it
//! (parse one view per thread if checks must run in parallel).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};
use thiserror::Error;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// The only hard fault this crate can produce: the document text could not
/// be obtained at all, so no view (and therefore no result mapping) exists.
///
/// An unparseable-looking document is *not* an error — HTML parsing always
/// yields a tree, and expectations that the tree cannot satisfy simply fail.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file was missing, unreadable, or not valid UTF-8.
    #[error("failed to read '{}': {source}", path.display())]
    Unreadable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Element-specific data, snapshotted out of the parsed tree.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element),
/// only the local name and attribute list matter to the checkers; namespace
/// and custom-element state are irrelevant for presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's local name, lowercased by the HTML parser.
    pub tag_name: String,
    /// The element's attribute list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Look up an attribute value by name (ASCII case-insensitive, as the
    /// host markup rules lowercase HTML attribute names).
    ///
    /// Returns `None` when the attribute is absent; an attribute present
    /// with an empty value returns `Some("")` — the two are distinct to the
    /// attribute checker.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Read-only structural accessor over one parsed HTML document.
#[derive(Debug)]
pub struct DocumentView {
    root: NodeRef,
}

impl DocumentView {
    /// Parse raw HTML text into a view.
    ///
    /// This is infallible: HTML parsing is defined for any input and always
    /// produces a tree, however degenerate.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// Read and parse an HTML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Unreadable`] when the file cannot be read as
    /// UTF-8 text. This is the single structural fault of the whole checker:
    /// everything downstream degrades to `fail` results instead of erroring.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let html = fs::read_to_string(path).map_err(|source| DocumentError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&html))
    }

    /// Collect every element with the given tag name, any depth, in
    /// document order. Tag names compare ASCII case-insensitively.
    #[must_use]
    pub fn elements_by_tag(&self, tag_name: &str) -> Vec<ElementData> {
        self.root
            .inclusive_descendants()
            .filter_map(|node| match node.data() {
                NodeData::Element(data)
                    if data.name.local.as_ref().eq_ignore_ascii_case(tag_name) =>
                {
                    let attrs = data.attributes.borrow();
                    let attrs_map = attrs
                        .map
                        .iter()
                        .map(|(name, attribute)| {
                            (name.local.to_string(), attribute.value.clone())
                        })
                        .collect();
                    Some(ElementData {
                        tag_name: data.name.local.to_string(),
                        attrs: attrs_map,
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Whether at least one element with the given tag name exists anywhere
    /// in the document (head or body, any depth).
    #[must_use]
    pub fn has_element(&self, tag_name: &str) -> bool {
        self.root.inclusive_descendants().any(|node| {
            matches!(node.data(), NodeData::Element(data)
                if data.name.local.as_ref().eq_ignore_ascii_case(tag_name))
        })
    }

    /// Distinct tag names present in the document, in first-appearance
    /// order. Used by the CLI's inspect output.
    #[must_use]
    pub fn tag_names(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for node in self.root.inclusive_descendants() {
            if let NodeData::Element(data) = node.data() {
                let name = data.name.local.to_string();
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        seen
    }

    /// The embedded stylesheet text, per
    /// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element):
    /// the text contents of every `<style>` element that is a direct child
    /// of `<head>`, concatenated in document order with a single space.
    ///
    /// Returns `None` when no such element exists — callers treat that as
    /// "no stylesheet at all" and fail every CSS expectation without
    /// searching. An empty `<style></style>` yields `Some("")` instead: the
    /// stylesheet exists, it just defines nothing.
    #[must_use]
    pub fn head_style_text(&self) -> Option<String> {
        let Ok(styles) = self.root.select("head > style") else {
            return None;
        };
        let blocks: Vec<String> = styles
            .map(|style| style.as_node().text_contents())
            .collect();
        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join(" "))
        }
    }
}
