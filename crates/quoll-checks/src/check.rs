//! A check is one configured checker invocation, deserializable from
//! grading configuration.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use quoll_dom::DocumentView;

use crate::attribute::check_attributes;
use crate::css::check_css_rules;
use crate::requirement::{AttributeRequirement, CssRuleRequirement};
use crate::results::CheckResults;
use crate::tag::check_tags;

/// Which checker a [`Check`] dispatches to. Used for report labelling and
/// output routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CheckKind {
    /// Tag presence.
    TagPresence,
    /// Attribute presence, optionally with an exact value.
    AttributePresence,
    /// CSS rule presence with expected declarations.
    CssRule,
}

/// One configured checker invocation.
///
/// Serialized with an internal `kind` tag so grading configs read as a
/// flat list of checks:
///
/// ```json
/// { "kind": "tag_presence", "tags": ["html", "body"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Require each listed tag to occur somewhere in the document.
    TagPresence {
        /// Tag names, matched case-insensitively.
        tags: Vec<String>,
    },
    /// Require attributes (optionally with exact values) on elements.
    AttributePresence {
        /// One entry per expected attribute.
        requirements: Vec<AttributeRequirement>,
    },
    /// Require rule blocks with expected declarations in head styles.
    CssRule {
        /// One entry per expected rule.
        requirements: Vec<CssRuleRequirement>,
    },
}

impl Check {
    /// The checker this variant dispatches to.
    #[must_use]
    pub const fn kind(&self) -> CheckKind {
        match self {
            Self::TagPresence { .. } => CheckKind::TagPresence,
            Self::AttributePresence { .. } => CheckKind::AttributePresence,
            Self::CssRule { .. } => CheckKind::CssRule,
        }
    }

    /// Run the configured checker against `doc`.
    #[must_use]
    pub fn run(&self, doc: &DocumentView) -> CheckResults {
        match self {
            Self::TagPresence { tags } => check_tags(doc, tags),
            Self::AttributePresence { requirements } => check_attributes(doc, requirements),
            Self::CssRule { requirements } => check_css_rules(doc, requirements),
        }
    }
}
