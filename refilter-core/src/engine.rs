//! The sequential substitution engine.
//!
//! Applies a [`RuleSet`] to a text value, rule by rule. Each rule replaces
//! every non-overlapping match in the current text, with replacement
//! back-references resolved against that match's captured groups. A rule
//! that fails at match time (backtrack-limit exhaustion on pathological
//! input) is logged and treated as a no-op for this text; subsequent rules
//! still run. The engine always returns usable text.
//!
//! License: MIT OR Apache-2.0

use fancy_regex::Expander;
use log::error;

use crate::compiler::{CompiledRule, RuleSet};
use crate::errors::FilterError;

/// Applies every rule in order and reports which ones changed the text.
///
/// Returns the final text and the display names of applied rules, in rule
/// set order. An empty rule set is the identity transform.
pub fn apply_rules(rules: &RuleSet, text: &str) -> (String, Vec<String>) {
    let mut cleaned = text.to_string();
    let mut applied = Vec::new();

    for rule in &rules.rules {
        match apply_rule(rule, &cleaned) {
            Ok(next) => {
                if next != cleaned {
                    applied.push(rule.name.clone());
                    cleaned = next;
                }
            }
            Err(e) => error!("{}", e),
        }
    }

    (cleaned, applied)
}

/// Substitutes all matches of one rule in `text`.
///
/// The splice loop copies unmatched gaps verbatim and expands the
/// replacement template against each match's captures.
fn apply_rule(rule: &CompiledRule, text: &str) -> Result<String, FilterError> {
    let expander = Expander::default();
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;

    for caps in rule.regex.captures_iter(text) {
        let caps = caps.map_err(|e| FilterError::RuleApplication(rule.name.clone(), e))?;
        let m = caps
            .get(0)
            .ok_or_else(|| FilterError::Fatal("regex capture group 0 missing".to_string()))?;
        out.push_str(&text[last_end..m.start()]);
        expander.append_expansion(&mut out, &rule.replacement, &caps);
        last_end = m.end();
    }
    out.push_str(&text[last_end..]);

    Ok(out)
}
