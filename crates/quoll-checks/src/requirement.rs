//! Declarative expectation types consumed by the checkers.
//!
//! Requirement lists are static input: they are built (usually deserialized
//! from the grading configuration) before a check run and never mutated by
//! it. Each requirement produces exactly one entry in the result mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A required tag/attribute combination, optionally pinned to an exact
/// attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRequirement {
    /// Tag name whose elements are inspected.
    pub tag: String,
    /// Attribute that must be present on at least one such element.
    pub attribute: String,
    /// Exact value the attribute must carry. `None` means presence alone
    /// satisfies the requirement, whatever the value (including empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeRequirement {
    /// Presence-only requirement: any element carrying the attribute
    /// satisfies it.
    #[must_use]
    pub fn present(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            value: None,
        }
    }

    /// Exact-value requirement.
    #[must_use]
    pub fn with_value(
        tag: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            value: Some(value.into()),
        }
    }

    /// The key this requirement reports under: `tag[attr]`, or
    /// `tag[attr=value]` when a value is expected. Distinct
    /// tag/attribute/value combinations can never collide; duplicate
    /// requirements overwrite the same entry (last write wins).
    #[must_use]
    pub fn result_key(&self) -> String {
        match &self.value {
            Some(value) => format!("{}[{}={}]", self.tag, self.attribute, value),
            None => format!("{}[{}]", self.tag, self.attribute),
        }
    }
}

/// An expected CSS property value, declared either as text (`"center"`,
/// `"2px"`) or as a bare numeric literal (`1.6`).
///
/// Both forms are matched textually against the stylesheet; a number is
/// rendered through its `Display` form first (`1.6` searches for `1.6`,
/// `2.0` for `2`), which reads the same as the configuration literal.
/// Matching stays textual: no unit-aware or float-tolerant comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    /// Literal text to search for after the property's colon.
    Text(String),
    /// Numeric literal, matched by its textual form.
    Number(f64),
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ExpectedValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ExpectedValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for ExpectedValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// One property/value pair expected inside a rule block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssPropertyRequirement {
    /// Property name, e.g. `text-align`.
    pub property: String,
    /// Expected value token.
    pub value: ExpectedValue,
}

impl CssPropertyRequirement {
    /// Build a property expectation from a name and a text or numeric value.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<ExpectedValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A required CSS rule: a selector plus the property/value pairs that must
/// all appear within the first rule block matching that selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRuleRequirement {
    /// Selector name, searched for as a whole-word token in rule heads
    /// (the head may be compound, e.g. `h1, .title`, or use combinators).
    pub selector: String,
    /// Property expectations; all of them must match or the whole rule
    /// requirement fails. An empty list is satisfied by the block existing.
    #[serde(default)]
    pub properties: Vec<CssPropertyRequirement>,
}

impl CssRuleRequirement {
    /// Build a rule expectation from a selector and its property list.
    #[must_use]
    pub fn new(selector: impl Into<String>, properties: Vec<CssPropertyRequirement>) -> Self {
        Self {
            selector: selector.into(),
            properties,
        }
    }
}
