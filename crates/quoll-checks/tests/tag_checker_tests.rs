//! Integration tests for the tag presence checker.

use quoll_checks::{CheckStatus, check_tags};
use quoll_dom::DocumentView;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn test_reports_present_and_missing_tags() {
    let doc = DocumentView::parse("<html><body><h1>x</h1></body></html>");
    let results = check_tags(&doc, &tags(&["html", "body", "title"]));

    assert_eq!(results.get("html"), Some(CheckStatus::Pass));
    assert_eq!(results.get("body"), Some(CheckStatus::Pass));
    assert_eq!(results.get("title"), Some(CheckStatus::Fail));
}

#[test]
fn test_one_entry_per_requested_tag() {
    let doc = DocumentView::parse("<html><body><p>hi</p></body></html>");
    let results = check_tags(&doc, &tags(&["p", "div", "nav"]));
    assert_eq!(results.len(), 3);
}

#[test]
fn test_duplicate_tags_collapse_to_one_entry() {
    let doc = DocumentView::parse("<html><body><p>hi</p></body></html>");
    let results = check_tags(&doc, &tags(&["p", "div", "p"]));
    assert_eq!(results.len(), 2);
    assert_eq!(results.get("p"), Some(CheckStatus::Pass));
}

#[test]
fn test_tag_matching_is_case_insensitive() {
    let doc = DocumentView::parse("<html><body><DIV>x</DIV></body></html>");
    let results = check_tags(&doc, &tags(&["div", "DIV"]));
    assert_eq!(results.get("div"), Some(CheckStatus::Pass));
    assert_eq!(results.get("DIV"), Some(CheckStatus::Pass));
}

#[test]
fn test_nested_tags_count_at_any_depth() {
    let doc = DocumentView::parse(
        "<html><body><div><section><article><em>deep</em></article></section></div></body></html>",
    );
    let results = check_tags(&doc, &tags(&["em"]));
    assert_eq!(results.get("em"), Some(CheckStatus::Pass));
}

#[test]
fn test_result_order_follows_declaration_order() {
    let doc = DocumentView::parse("<html><body></body></html>");
    let results = check_tags(&doc, &tags(&["title", "body", "html"]));
    let keys: Vec<&str> = results.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["title", "body", "html"]);
}

#[test]
fn test_empty_request_yields_empty_results() {
    let doc = DocumentView::parse("<html><body></body></html>");
    let results = check_tags(&doc, &[]);
    assert!(results.is_empty());
}

#[test]
fn test_checking_twice_yields_identical_results() {
    let doc = DocumentView::parse("<html><body><nav>menu</nav></body></html>");
    let list = tags(&["nav", "footer"]);
    assert_eq!(check_tags(&doc, &list), check_tags(&doc, &list));
}
