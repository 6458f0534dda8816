//! CSS rule checker over the document's head style text.
//!
//! This is deliberately not a CSS parser. Rules are located by pattern
//! matching over the raw concatenated `<head>` style text: a rule block is
//! any `{...}` group whose preceding selector run contains the requested
//! selector as a whole word, and a declaration is any `property: value`
//! pair inside that block. Comments, at-rules and shorthand expansion are
//! out of scope; authors of grading configs are expected to name selectors
//! and literal values the way the graded stylesheet spells them.
//!
//! Matching never aborts a run. A selector that cannot be turned into a
//! valid pattern degrades to a failed entry and a deduplicated warning on
//! stderr.

use quoll_common::warning::warn_once;
use quoll_dom::DocumentView;
use regex::Regex;

use crate::requirement::CssRuleRequirement;
use crate::results::{CheckResults, CheckStatus};

/// Check CSS rule requirements against the document's head styles.
///
/// If the document has no `<head>` style blocks at all, every requirement
/// fails without any pattern matching. Otherwise each requirement passes
/// when its selector's first rule block contains every expected
/// declaration; a requirement with no declarations passes on the block's
/// existence alone.
#[must_use]
pub fn check_css_rules(doc: &DocumentView, requirements: &[CssRuleRequirement]) -> CheckResults {
    let mut results = CheckResults::new();
    let Some(stylesheet) = doc.head_style_text() else {
        for requirement in requirements {
            results.insert(requirement.selector.clone(), CheckStatus::Fail);
        }
        return results;
    };
    for requirement in requirements {
        results.insert(
            requirement.selector.clone(),
            CheckStatus::from_found(check_rule(&stylesheet, requirement)),
        );
    }
    results
}

fn check_rule(stylesheet: &str, requirement: &CssRuleRequirement) -> bool {
    let Some(block) = find_rule_block(stylesheet, &requirement.selector) else {
        return false;
    };
    requirement
        .properties
        .iter()
        .all(|property| property_in_block(&block, &property.property, &property.value.to_string()))
}

/// First `selector { ... }` block in the stylesheet, selector matched as a
/// whole word anywhere in the block's selector run. Later blocks for the
/// same selector are never consulted.
fn find_rule_block(stylesheet: &str, selector: &str) -> Option<String> {
    let pattern = format!(
        r"(?i)[^{{}}]*\b{}\b[^{{}}]*\{{[^}}]*\}}",
        regex::escape(selector)
    );
    let Ok(re) = Regex::new(&pattern) else {
        warn_once(
            "CSS",
            &format!("selector '{selector}' produced an unusable pattern; marking it failed"),
        );
        return None;
    };
    re.find(stylesheet).map(|found| found.as_str().to_string())
}

/// Whether `property: value` appears in the block, case-insensitively and
/// with any whitespace around the colon.
fn property_in_block(block: &str, property: &str, value: &str) -> bool {
    let pattern = format!(
        r"(?i){}\s*:\s*{}",
        regex::escape(property),
        regex::escape(value)
    );
    Regex::new(&pattern).is_ok_and(|re| re.is_match(block))
}
