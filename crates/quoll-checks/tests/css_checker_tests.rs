//! Integration tests for the CSS rule checker.

use quoll_checks::{CheckStatus, CssPropertyRequirement, CssRuleRequirement, check_css_rules};
use quoll_dom::DocumentView;

fn doc_with_style(css: &str) -> DocumentView {
    DocumentView::parse(&format!(
        "<html><head><style>{css}</style></head><body></body></html>"
    ))
}

#[test]
fn test_selector_present_but_property_missing_fails() {
    let doc = doc_with_style("h1 { color: red; }");
    let requirement = CssRuleRequirement::new(
        "h1",
        vec![CssPropertyRequirement::new("text-align", "center")],
    );
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("h1"), Some(CheckStatus::Fail));
}

#[test]
fn test_all_properties_present_passes() {
    let doc = doc_with_style("p { text-align: justify; line-height: 1.6; letter-spacing: 2px; }");
    let requirement = CssRuleRequirement::new(
        "p",
        vec![
            CssPropertyRequirement::new("text-align", "justify"),
            CssPropertyRequirement::new("line-height", 1.6),
            CssPropertyRequirement::new("letter-spacing", "2px"),
        ],
    );
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Pass));
}

#[test]
fn test_missing_selector_fails() {
    let doc = doc_with_style("h1 { color: red; }");
    let requirement =
        CssRuleRequirement::new("h2", vec![CssPropertyRequirement::new("color", "red")]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("h2"), Some(CheckStatus::Fail));
}

#[test]
fn test_no_head_style_fails_every_requirement() {
    let doc = DocumentView::parse("<html><head></head><body><p>x</p></body></html>");
    let requirements = vec![
        CssRuleRequirement::new("p", vec![]),
        CssRuleRequirement::new("h1", vec![CssPropertyRequirement::new("color", "red")]),
    ];
    let results = check_css_rules(&doc, &requirements);

    assert_eq!(results.len(), 2);
    assert_eq!(results.get("p"), Some(CheckStatus::Fail));
    assert_eq!(results.get("h1"), Some(CheckStatus::Fail));
}

#[test]
fn test_body_styles_are_not_consulted() {
    let doc = DocumentView::parse(
        "<html><head></head><body><style>p { color: red; }</style><p>x</p></body></html>",
    );
    let requirement =
        CssRuleRequirement::new("p", vec![CssPropertyRequirement::new("color", "red")]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Fail));
}

#[test]
fn test_only_the_first_matching_block_is_consulted() {
    let doc = doc_with_style("h1 { color: red; } h1 { color: blue; }");
    let requirements = vec![CssRuleRequirement::new(
        "h1",
        vec![CssPropertyRequirement::new("color", "blue")],
    )];
    let results = check_css_rules(&doc, &requirements);
    assert_eq!(results.get("h1"), Some(CheckStatus::Fail));

    let requirements = vec![CssRuleRequirement::new(
        "h1",
        vec![CssPropertyRequirement::new("color", "red")],
    )];
    let results = check_css_rules(&doc, &requirements);
    assert_eq!(results.get("h1"), Some(CheckStatus::Pass));
}

#[test]
fn test_compound_selector_heads_match_single_tokens() {
    let doc = doc_with_style("h1, .title { font-weight: bold; }");
    let requirement = CssRuleRequirement::new(
        "h1",
        vec![CssPropertyRequirement::new("font-weight", "bold")],
    );
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("h1"), Some(CheckStatus::Pass));
}

#[test]
fn test_selector_matching_is_token_identity_not_parsing() {
    // "title" finds the ".title" class rule because matching is on
    // word-boundary tokens within the selector text.
    let doc = doc_with_style(".title { font-style: italic; }");
    let requirement = CssRuleRequirement::new(
        "title",
        vec![CssPropertyRequirement::new("font-style", "italic")],
    );
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("title"), Some(CheckStatus::Pass));
}

#[test]
fn test_selector_tokens_do_not_match_inside_longer_words() {
    let doc = doc_with_style("pre { margin: 0; }");
    let requirement = CssRuleRequirement::new("p", vec![]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Fail));
}

#[test]
fn test_value_match_is_textual_prefix_containment() {
    let doc = doc_with_style("p { line-height: 1.60; }");
    let requirement =
        CssRuleRequirement::new("p", vec![CssPropertyRequirement::new("line-height", 1.6)]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Pass));

    let doc = doc_with_style("p { line-height: 1.6; }");
    let requirement = CssRuleRequirement::new(
        "p",
        vec![CssPropertyRequirement::new("line-height", "1.60")],
    );
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Fail));
}

#[test]
fn test_whole_number_values_render_without_decimal_point() {
    let doc = doc_with_style("div { z-index: 2; }");
    let requirement =
        CssRuleRequirement::new("div", vec![CssPropertyRequirement::new("z-index", 2.0)]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("div"), Some(CheckStatus::Pass));
}

#[test]
fn test_matching_is_case_insensitive() {
    let doc = doc_with_style("H1 { COLOR: RED; }");
    let requirement =
        CssRuleRequirement::new("h1", vec![CssPropertyRequirement::new("color", "red")]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("h1"), Some(CheckStatus::Pass));
}

#[test]
fn test_empty_property_list_passes_on_block_existence() {
    let doc = doc_with_style("nav { }");
    let requirements = vec![
        CssRuleRequirement::new("nav", vec![]),
        CssRuleRequirement::new("aside", vec![]),
    ];
    let results = check_css_rules(&doc, &requirements);

    assert_eq!(results.get("nav"), Some(CheckStatus::Pass));
    assert_eq!(results.get("aside"), Some(CheckStatus::Fail));
}

#[test]
fn test_empty_style_element_fails_without_a_block() {
    let doc = doc_with_style("");
    let requirement = CssRuleRequirement::new("p", vec![]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Fail));
}

#[test]
fn test_all_head_style_blocks_are_searched() {
    let doc = DocumentView::parse(
        "<html><head><style>h1 { color: red; }</style><style>p { margin: 0; }</style></head>\
         <body></body></html>",
    );
    let requirement =
        CssRuleRequirement::new("p", vec![CssPropertyRequirement::new("margin", 0.0)]);
    let results = check_css_rules(&doc, &[requirement]);
    assert_eq!(results.get("p"), Some(CheckStatus::Pass));
}

#[test]
fn test_checking_twice_yields_identical_results() {
    let doc = doc_with_style("p { color: green; }");
    let requirements = vec![CssRuleRequirement::new(
        "p",
        vec![CssPropertyRequirement::new("color", "green")],
    )];
    assert_eq!(
        check_css_rules(&doc, &requirements),
        check_css_rules(&doc, &requirements)
    );
}
