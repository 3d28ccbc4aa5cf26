// refilter-core/src/lib.rs
//! # Refilter Core Library
//!
//! `refilter-core` provides the host-independent logic for post-processing
//! chat-model output with regular-expression substitution rules. It defines
//! the preset rule catalog and the configuration shapes for user-defined
//! rules, compiles both into an ordered rule set, and applies that set
//! sequentially to one or more independent text fragments while tracking
//! which rules fired.
//!
//! The library is designed to be pure and synchronous, focusing solely on
//! the transformation of input text based on the configured rules, without
//! concerns for the hosting pipeline's lifecycle or I/O.
//!
//! ## Modules
//!
//! * `config`: Tolerant parsing of the host configuration mapping into a [`FilterConfig`].
//! * `presets`: The fixed, ordered catalog of built-in substitution rules.
//! * `compiler`: Batch compilation of presets and custom rules into a [`RuleSet`].
//! * `engine`: Sequential application of a rule set to a text value.
//! * `filter`: The [`RegexFilter`] facade - reload lifecycle and the two filtering hooks.
//! * `message`: The segment model for structured outbound messages.
//! * `errors`: Structured error types for compilation and application faults.
//!
//! ## Usage Example
//!
//! ```rust
//! use refilter_core::{FilterConfig, RegexFilter, Segment};
//! use serde_json::json;
//!
//! // The host hands the filter its configuration as already-loaded data.
//! let config = FilterConfig::from_value(&json!({
//!     "remove_markdown_bold": true,
//!     "custom_rules": [
//!         { "name": "no-foo", "pattern": "foo", "replacement": "bar" }
//!     ]
//! }));
//! let filter = RegexFilter::new(config);
//!
//! let mut segments = vec![
//!     Segment::plain("**foo** and foo"),
//!     Segment::Other { payload: json!({ "kind": "image" }) },
//! ];
//! let outcome = filter.filter_segments(&mut segments);
//!
//! assert!(outcome.any_changed);
//! assert_eq!(segments[0], Segment::plain("bar and bar"));
//! ```
//!
//! ## Error Handling
//!
//! There is no fatal path in the core: a rule that fails to compile is
//! logged and excluded from the set, a rule that faults at match time is
//! logged and skipped for that text, and a malformed custom-rules section
//! yields zero custom rules. The engine always returns usable text, even
//! for an empty rule set or a totally malformed configuration.
//!
//! ## Design Principles
//!
//! * **Deterministic order:** enabled presets in catalog order, then custom
//!   rules in configuration order; later rules see earlier rules' output.
//! * **Wholesale replacement:** a reload swaps the full configuration and
//!   rule set atomically; compiled rules are never mutated in place.
//! * **Partial-failure tolerance:** every rule is loaded and applied
//!   independently of its siblings' success or failure.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod message;
pub mod presets;

/// Re-exports the public configuration types for filter and rule settings.
pub use config::{
    CustomRule,
    FilterConfig,
    PatternFlags,
    CUSTOM_RULE_SLOTS,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the compiled rule set types and the batch compiler.
pub use compiler::{compile_pattern, compile_rule_set, CompiledRule, RuleOrigin, RuleSet};

/// Re-exports the sequential substitution engine.
pub use engine::apply_rules;

/// Re-exports the filter facade and its report types.
pub use filter::{FilterOutcome, RegexFilter, TestReport};

/// Re-exports the message segment model.
pub use message::Segment;

/// Re-exports the preset catalog for hosts that display or document it.
pub use presets::{PresetRule, CATALOG};
