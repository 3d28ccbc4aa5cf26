//! compiler.rs - Turns a configuration into an ordered set of compiled rules.
//!
//! Compilation is batch-tolerant: a rule whose pattern fails to compile is
//! logged and excluded, and never blocks the remaining entries. The result
//! is always a usable (possibly empty) [`RuleSet`].
//!
//! License: MIT OR Apache-2.0

use fancy_regex::{Regex, RegexBuilder};
use log::{debug, error, info};

use crate::config::{FilterConfig, PatternFlags, MAX_PATTERN_LENGTH};
use crate::errors::FilterError;
use crate::presets;

/// Backtracking step budget per match attempt. Exhausting it surfaces as a
/// per-rule application error at match time, not a process failure.
pub const BACKTRACK_LIMIT: usize = 1_000_000;

/// Where a rule came from. Used only for display prefixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    Preset,
    Custom,
}

impl RuleOrigin {
    pub fn prefix(self) -> &'static str {
        match self {
            RuleOrigin::Preset => "[preset]",
            RuleOrigin::Custom => "[custom]",
        }
    }
}

/// A single compiled substitution rule, immutable once built.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Replacement template with `$n` back-references.
    pub replacement: String,
    /// Display name, already origin-prefixed (e.g. `[preset] HTML标签`).
    pub name: String,
    pub origin: RuleOrigin,
}

/// The ordered, currently-active collection of compiled rules.
///
/// Enabled presets come first, in catalog declaration order, followed by
/// enabled custom rules in configuration order. Rules are applied in this
/// exact sequence; later rules see the output of earlier ones.
#[derive(Debug, Default)]
pub struct RuleSet {
    pub rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Display names in application order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }
}

/// Builds a [`RuleSet`] from the configuration.
///
/// Never fails: each entry is compiled independently, failures are logged
/// with the offending rule's name and skipped.
pub fn compile_rule_set(config: &FilterConfig) -> RuleSet {
    let mut rules = Vec::new();

    let mut preset_count = 0usize;
    for preset in presets::CATALOG {
        if !config.enabled_presets.contains(preset.key) {
            continue;
        }
        match compile_pattern(preset.pattern, PatternFlags::parse(preset.flags)) {
            Ok(regex) => {
                info!("Preset rule enabled: {}", preset.label);
                rules.push(CompiledRule {
                    regex,
                    replacement: preset.replacement.to_string(),
                    name: format!("{} {}", RuleOrigin::Preset.prefix(), preset.label),
                    origin: RuleOrigin::Preset,
                });
                preset_count += 1;
            }
            Err(e) => error!("Failed to compile preset rule '{}': {}", preset.label, e),
        }
    }

    let mut custom_count = 0usize;
    for (idx, rule) in config.custom_rules.iter().enumerate() {
        if !rule.enabled {
            continue;
        }
        let pattern = rule.pattern.trim();
        if pattern.is_empty() {
            continue;
        }
        let label = rule
            .name
            .clone()
            .unwrap_or_else(|| format!("Rule_{}", idx + 1));
        match compile_pattern(pattern, PatternFlags::parse(&rule.flags)) {
            Ok(regex) => {
                info!("Custom rule loaded: {}", label);
                rules.push(CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                    name: format!("{} {}", RuleOrigin::Custom.prefix(), label),
                    origin: RuleOrigin::Custom,
                });
                custom_count += 1;
            }
            Err(e) => error!("Failed to compile custom rule '{}': {}", label, e),
        }
    }

    info!(
        "Rule load complete: {} preset, {} custom, {} total",
        preset_count,
        custom_count,
        rules.len()
    );
    RuleSet { rules }
}

/// Compiles one pattern with its flags applied as an inline prefix.
pub fn compile_pattern(pattern: &str, flags: PatternFlags) -> Result<Regex, FilterError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(FilterError::PatternLengthExceeded(
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }
    let full_pattern = format!("{}{}", flags.inline_prefix(), pattern);
    debug!(
        target: "refilter_core::compiler",
        "Compiling pattern '{}'", full_pattern
    );
    RegexBuilder::new(&full_pattern)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(FilterError::RuleCompilation)
}
