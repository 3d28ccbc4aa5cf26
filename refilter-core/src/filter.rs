//! The filter facade: configuration lifecycle plus the two filtering hooks.
//!
//! The facade owns the active configuration and rule set as one unit of
//! state behind `RwLock<Arc<_>>`. A reload builds the complete replacement
//! state before taking the write lock, so concurrent readers observe either
//! the old set or the new set, never one in progress. Between reloads the
//! state is read-only, which makes concurrent filtering calls safe.
//!
//! License: MIT OR Apache-2.0

use std::sync::{Arc, RwLock};

use log::warn;

use crate::compiler::{compile_rule_set, RuleSet};
use crate::config::FilterConfig;
use crate::engine::apply_rules;
use crate::message::Segment;

#[derive(Debug)]
struct FilterState {
    config: FilterConfig,
    rules: RuleSet,
}

/// Aggregated result of one filtering call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Whether any fragment changed.
    pub any_changed: bool,
    /// Union of applied rule names across fragments, first-seen order,
    /// deduplicated.
    pub applied: Vec<String>,
}

/// Before/after report for ad-hoc test input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub input: String,
    pub output: String,
    pub applied: Vec<String>,
}

/// The filtering entry point handed to the host.
#[derive(Debug)]
pub struct RegexFilter {
    state: RwLock<Arc<FilterState>>,
}

impl RegexFilter {
    /// Builds a filter with an initial rule set compiled from `config`.
    pub fn new(config: FilterConfig) -> Self {
        let rules = compile_rule_set(&config);
        Self {
            state: RwLock::new(Arc::new(FilterState { config, rules })),
        }
    }

    /// Discards the previous configuration and rule set and swaps in a set
    /// rebuilt from `config`. Never partially updates.
    pub fn reload(&self, config: FilterConfig) {
        let rules = compile_rule_set(&config);
        let next = Arc::new(FilterState { config, rules });
        *self.state.write().unwrap() = next;
    }

    fn snapshot(&self) -> Arc<FilterState> {
        Arc::clone(&self.state.read().unwrap())
    }

    /// Number of currently active rules.
    pub fn rule_count(&self) -> usize {
        self.snapshot().rules.len()
    }

    /// Display names of the currently active rules, in application order.
    pub fn rule_names(&self) -> Vec<String> {
        self.snapshot()
            .rules
            .rules
            .iter()
            .map(|rule| rule.name.clone())
            .collect()
    }

    /// Post-generation hook: filters a raw completion string in place.
    pub fn filter_completion(&self, text: &mut String) -> FilterOutcome {
        let state = self.snapshot();
        if !state.config.enable_plugin {
            return FilterOutcome::default();
        }

        let mut outcome = FilterOutcome::default();
        let (cleaned, applied) = apply_rules(&state.rules, text);
        if cleaned != *text {
            *text = cleaned;
            outcome.any_changed = true;
            merge_applied(&mut outcome.applied, applied);
        }
        self.log_outcome(&state, &outcome);
        outcome
    }

    /// Pre-delivery hook: filters each plain text segment independently,
    /// mutating changed segments in place. Fragments share no substitution
    /// state; a match in one has no effect on another.
    pub fn filter_segments(&self, segments: &mut [Segment]) -> FilterOutcome {
        let state = self.snapshot();
        if !state.config.enable_plugin {
            return FilterOutcome::default();
        }

        let mut outcome = FilterOutcome::default();
        for segment in segments.iter_mut() {
            let Segment::Plain { text } = segment else {
                continue;
            };
            let (cleaned, applied) = apply_rules(&state.rules, text);
            if cleaned != *text {
                *text = cleaned;
                outcome.any_changed = true;
                merge_applied(&mut outcome.applied, applied);
            }
        }
        self.log_outcome(&state, &outcome);
        outcome
    }

    /// Administrative test application. Bypasses the `enable_plugin` toggle
    /// so rules can be exercised while the filter is switched off.
    pub fn preview(&self, input: &str) -> TestReport {
        let state = self.snapshot();
        let (output, applied) = apply_rules(&state.rules, input);
        let mut deduped = Vec::new();
        merge_applied(&mut deduped, applied);
        TestReport {
            input: input.to_string(),
            output,
            applied: deduped,
        }
    }

    fn log_outcome(&self, state: &FilterState, outcome: &FilterOutcome) {
        if outcome.any_changed && state.config.enable_logging {
            warn!("Filtered output, rules fired: {}", outcome.applied.join(", "));
        }
    }
}

fn merge_applied(into: &mut Vec<String>, names: Vec<String>) {
    for name in names {
        if !into.contains(&name) {
            into.push(name);
        }
    }
}
