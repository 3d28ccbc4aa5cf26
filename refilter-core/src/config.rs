//! Configuration management for `refilter-core`.
//!
//! This module defines the data structures for filter configuration and the
//! tolerant parsing that turns a host-supplied configuration mapping into a
//! [`FilterConfig`]. The mapping is accepted as an already-loaded
//! `serde_json::Value` tree; its exact shape is an external, evolvable
//! contract, so parsing never fails outright - unrecognized or malformed
//! sections are logged and degrade to their defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::presets;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Number of numbered custom-rule slots recognized in the legacy shape.
pub const CUSTOM_RULE_SLOTS: usize = 5;

/// Regex option flags, independently toggleable and additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternFlags {
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^`/`$` match at every line boundary.
    pub multi_line: bool,
    /// `s`: `.` also matches newlines.
    pub dot_matches_new_line: bool,
}

impl PatternFlags {
    /// Parses a flag specifier string.
    ///
    /// Characters are read one at a time, case-insensitively: `I`, `M` and
    /// `S` toggle their flag; anything else is ignored. An empty specifier
    /// means no flags.
    pub fn parse(spec: &str) -> Self {
        let mut flags = Self::default();
        for ch in spec.chars() {
            match ch.to_ascii_uppercase() {
                'I' => flags.case_insensitive = true,
                'M' => flags.multi_line = true,
                'S' => flags.dot_matches_new_line = true,
                _ => {}
            }
        }
        flags
    }

    /// Renders the flags as an inline regex prefix, e.g. `(?ms)`.
    pub fn inline_prefix(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multi_line {
            letters.push('m');
        }
        if self.dot_matches_new_line {
            letters.push('s');
        }
        if letters.is_empty() {
            String::new()
        } else {
            format!("(?{letters})")
        }
    }
}

/// A user-authored substitution rule, as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomRule {
    /// Custom rules run unless explicitly disabled.
    pub enabled: bool,
    /// The regex pattern string. Entries with an empty (after trimming)
    /// pattern are skipped at compile time.
    pub pattern: String,
    /// Display name; defaults to `Rule_<1-based index>` when absent.
    pub name: Option<String>,
    /// Replacement template; may reference captured groups with `$1`..`$9`
    /// (and beyond, `${n}` for disambiguation).
    pub replacement: String,
    /// Flag specifier string, see [`PatternFlags::parse`].
    pub flags: String,
}

impl Default for CustomRule {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: String::new(),
            name: None,
            replacement: String::new(),
            flags: String::new(),
        }
    }
}

/// The complete filter configuration, owned by the facade and replaced
/// wholesale on every reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Master on/off switch; when false, filtering is a no-op.
    pub enable_plugin: bool,
    /// Whether fired rule names are reported in the log.
    pub enable_logging: bool,
    /// Preset catalog keys explicitly enabled by the configuration.
    pub enabled_presets: HashSet<String>,
    /// Custom rules in configuration order. Disabled and empty-pattern
    /// entries are retained here and skipped by the compiler.
    pub custom_rules: Vec<CustomRule>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enable_plugin: true,
            enable_logging: true,
            enabled_presets: HashSet::new(),
            custom_rules: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Builds a configuration from a host-supplied mapping.
    ///
    /// This never fails: missing keys take their defaults, and a malformed
    /// custom-rules section is logged and yields zero custom rules.
    pub fn from_value(value: &Value) -> Self {
        let enable_plugin = bool_option(value, "enable_plugin", true);
        let enable_logging = bool_option(value, "enable_logging", true);

        let mut enabled_presets = HashSet::new();
        for preset in presets::CATALOG {
            if bool_option(value, preset.key, false) {
                enabled_presets.insert(preset.key.to_string());
            }
        }

        Self {
            enable_plugin,
            enable_logging,
            enabled_presets,
            custom_rules: parse_custom_rules(value),
        }
    }

    /// Loads a configuration mapping from a YAML or JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        let value: Value = if is_json {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            serde_yml::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        };
        Ok(Self::from_value(&value))
    }

    /// Enables additional preset keys on top of the loaded configuration.
    pub fn enable_presets(&mut self, keys: &[String]) {
        for key in keys {
            if presets::find(key).is_some() {
                self.enabled_presets.insert(key.clone());
            } else {
                warn!("Preset rule '{}' does not exist.", key);
            }
        }
    }
}

fn bool_option(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Shape-detecting custom-rule parser.
///
/// The modern shape is a `custom_rules` list of rule objects; the legacy
/// shape is up to [`CUSTOM_RULE_SLOTS`] numbered flat-key slots. Whichever
/// is present is parsed; anything unexpected degrades to zero rules.
fn parse_custom_rules(value: &Value) -> Vec<CustomRule> {
    match value.get("custom_rules") {
        Some(Value::Array(items)) => parse_custom_rule_list(items),
        Some(other) => {
            warn!(
                "`custom_rules` is not a list (found {}); ignoring custom rules for this load",
                json_type_name(other)
            );
            Vec::new()
        }
        None => parse_custom_rule_slots(value),
    }
}

fn parse_custom_rule_list(items: &[Value]) -> Vec<CustomRule> {
    let mut rules = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match serde_json::from_value::<CustomRule>(item.clone()) {
            Ok(mut rule) => {
                if rule.name.is_none() {
                    rule.name = Some(format!("Rule_{}", idx + 1));
                }
                rules.push(rule);
            }
            Err(e) => {
                warn!("Skipping malformed custom rule at index {}: {}", idx, e);
            }
        }
    }
    rules
}

fn parse_custom_rule_slots(value: &Value) -> Vec<CustomRule> {
    let mut rules = Vec::new();
    for slot in 1..=CUSTOM_RULE_SLOTS {
        let pattern = string_slot(value, slot, "pattern");
        if pattern.trim().is_empty() {
            continue;
        }
        rules.push(CustomRule {
            enabled: value
                .get(slot_key(slot, "enabled"))
                .and_then(Value::as_bool)
                .unwrap_or(true),
            pattern,
            name: Some(
                value
                    .get(slot_key(slot, "name"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Rule_{slot}")),
            ),
            replacement: string_slot(value, slot, "replacement"),
            flags: string_slot(value, slot, "flags"),
        });
    }
    rules
}

fn slot_key(slot: usize, field: &str) -> String {
    format!("custom_rule_{slot}_{field}")
}

fn string_slot(value: &Value, slot: usize, field: &str) -> String {
    value
        .get(slot_key(slot, field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
