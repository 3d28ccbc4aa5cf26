// refilter-core/tests/filter_facade_tests.rs
//! Facade lifecycle and fragment aggregation behavior.

use refilter_core::{FilterConfig, RegexFilter, Segment};
use serde_json::json;

fn filter_for(value: serde_json::Value) -> RegexFilter {
    RegexFilter::new(FilterConfig::from_value(&value))
}

#[test]
fn fragments_are_isolated_and_outcome_is_aggregated() {
    let filter = filter_for(json!({
        "custom_rules": [ { "name": "strip-foo", "pattern": "foo", "replacement": "bar" } ]
    }));

    let mut segments = vec![
        Segment::plain("foo fighters"),
        Segment::plain("nothing to see"),
    ];
    let outcome = filter.filter_segments(&mut segments);

    assert!(outcome.any_changed);
    assert_eq!(outcome.applied, vec!["[custom] strip-foo"]);
    assert_eq!(segments[0], Segment::plain("bar fighters"));
    // The unmatched fragment is untouched by its sibling's substitution.
    assert_eq!(segments[1], Segment::plain("nothing to see"));
}

#[test]
fn non_plain_segments_are_never_examined() {
    let filter = filter_for(json!({
        "custom_rules": [ { "pattern": "foo", "replacement": "bar" } ]
    }));

    let payload = json!({ "kind": "image", "alt": "foo" });
    let mut segments = vec![Segment::Other {
        payload: payload.clone(),
    }];
    let outcome = filter.filter_segments(&mut segments);

    assert!(!outcome.any_changed);
    assert!(outcome.applied.is_empty());
    assert_eq!(segments[0], Segment::Other { payload });
}

#[test]
fn applied_names_are_deduplicated_across_fragments() {
    let filter = filter_for(json!({
        "custom_rules": [ { "name": "strip-foo", "pattern": "foo", "replacement": "bar" } ]
    }));

    let mut segments = vec![Segment::plain("foo one"), Segment::plain("foo two")];
    let outcome = filter.filter_segments(&mut segments);

    assert!(outcome.any_changed);
    assert_eq!(outcome.applied, vec!["[custom] strip-foo"]);
}

#[test]
fn disabled_plugin_is_a_no_op() {
    let filter = filter_for(json!({
        "enable_plugin": false,
        "remove_markdown_bold": true,
    }));

    let mut segments = vec![Segment::plain("**kept**")];
    let outcome = filter.filter_segments(&mut segments);
    assert!(!outcome.any_changed);
    assert_eq!(segments[0], Segment::plain("**kept**"));

    let mut completion = "**kept**".to_string();
    let outcome = filter.filter_completion(&mut completion);
    assert!(!outcome.any_changed);
    assert_eq!(completion, "**kept**");
}

#[test]
fn completion_hook_mutates_in_place() {
    let filter = filter_for(json!({ "remove_markdown_bold": true }));

    let mut completion = "**hello** world".to_string();
    let outcome = filter.filter_completion(&mut completion);

    assert!(outcome.any_changed);
    assert_eq!(completion, "hello world");
    assert_eq!(outcome.applied, vec!["[preset] Markdown粗体"]);
}

#[test]
fn reload_replaces_the_rule_set_wholesale() {
    let filter = filter_for(json!({ "remove_markdown_bold": true }));
    assert_eq!(filter.rule_names(), vec!["[preset] Markdown粗体"]);

    filter.reload(FilterConfig::from_value(&json!({ "remove_think_tag": true })));
    assert_eq!(filter.rule_names(), vec!["[preset] 思考标签"]);
    assert_eq!(filter.rule_count(), 1);

    let mut completion = "**bold** <think>gone</think>".to_string();
    filter.filter_completion(&mut completion);
    assert_eq!(completion, "**bold** ");
}

#[test]
fn preview_reports_before_after_and_applied() {
    let filter = filter_for(json!({ "remove_markdown_bold": true }));

    let report = filter.preview("**hi** there");
    assert_eq!(report.input, "**hi** there");
    assert_eq!(report.output, "hi there");
    assert_eq!(report.applied, vec!["[preset] Markdown粗体"]);
}

#[test]
fn preview_bypasses_the_plugin_toggle() {
    let filter = filter_for(json!({
        "enable_plugin": false,
        "remove_markdown_bold": true,
    }));

    let report = filter.preview("**hi**");
    assert_eq!(report.output, "hi");
}

#[test]
fn malformed_configuration_still_yields_a_working_filter() {
    let filter = filter_for(json!({ "custom_rules": 42 }));

    assert_eq!(filter.rule_count(), 0);
    let mut completion = "unchanged".to_string();
    let outcome = filter.filter_completion(&mut completion);
    assert!(!outcome.any_changed);
    assert_eq!(completion, "unchanged");
}
