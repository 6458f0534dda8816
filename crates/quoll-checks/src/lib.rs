//! Structural expectation checkers for the Quoll grader.
//!
//! # Scope
//!
//! This crate implements the matching core:
//!
//! - **Tag Presence Checker** - required tags exist somewhere in the document
//! - **Attribute Presence Checker** - required tag/attribute(+value)
//!   combinations exist on at least one element
//! - **CSS Rule Checker** - required selectors define required
//!   property/value pairs, located by pattern matching over the raw
//!   stylesheet text
//! - **Verdict Aggregator** - collapses a result mapping into one pass/fail
//! - **Check dispatch** - a tagged [`Check`] routing a declared expectation
//!   list to the matching checker
//!
//! All checkers share one contract: `(document view, expectation list) ->
//! result mapping`, with exactly one entry per expectation. "Requirement not
//! satisfied" is an ordinary `fail` entry, never an error; the checkers
//! return no `Result` at all.
//!
//! # Not Implemented
//!
//! - CSS cascade or specificity resolution
//! - External (`<link>`) or `@import`ed stylesheets
//! - Inline `style` attributes
//! - Anything beyond presence/value spot-checks

/// Attribute presence checking.
pub mod attribute;
/// Tagged check dispatch.
pub mod check;
/// CSS rule/property presence checking over raw stylesheet text.
pub mod css;
/// Declarative expectation types.
pub mod requirement;
/// The per-invocation result mapping.
pub mod results;
/// Tag presence checking.
pub mod tag;
/// Verdict aggregation.
pub mod verdict;

// Re-exports for convenience
pub use attribute::check_attributes;
pub use check::{Check, CheckKind};
pub use css::check_css_rules;
pub use requirement::{
    AttributeRequirement, CssPropertyRequirement, CssRuleRequirement, ExpectedValue,
};
pub use results::{CheckResults, CheckStatus};
pub use tag::check_tags;
pub use verdict::{Verdict, aggregate};
