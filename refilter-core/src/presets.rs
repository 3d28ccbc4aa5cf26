//! The built-in preset rule catalog.
//!
//! Each entry strips one kind of formatting artifact from model output.
//! Presets are opt-in: a preset participates in a rule set only when the
//! configuration enables it by key. Declaration order here is the order
//! presets are applied in, and later rules see the output of earlier ones.
//!
//! License: MIT OR Apache-2.0

/// A single catalog entry: a fixed pattern, replacement, and flag specifier.
///
/// The `flags` field uses the same one-letter specifier syntax as custom
/// rules (`i`, `m`, `s`), so presets and custom rules share one flag parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRule {
    /// Configuration key that toggles this preset (e.g. "remove_think_tag").
    pub key: &'static str,
    /// Human-readable label, shown as `[preset] <label>` in reports.
    pub label: &'static str,
    /// The regex pattern string.
    pub pattern: &'static str,
    /// Replacement template; `$1` keeps the first captured group.
    pub replacement: &'static str,
    /// Flag specifier string, parsed with [`crate::config::PatternFlags::parse`].
    pub flags: &'static str,
}

/// The fixed preset catalog, in application order.
pub const CATALOG: &[PresetRule] = &[
    PresetRule {
        key: "remove_markdown_bold",
        label: "Markdown粗体",
        pattern: r"\*\*([^*]+)\*\*",
        replacement: "$1",
        flags: "",
    },
    PresetRule {
        key: "remove_markdown_italic",
        label: "Markdown斜体",
        // Look-around keeps bold runs intact when only italic is enabled.
        pattern: r"(?<!\*)\*(?!\*)([^*]+)(?<!\*)\*(?!\*)",
        replacement: "$1",
        flags: "",
    },
    PresetRule {
        key: "remove_markdown_code_block",
        label: "Markdown代码块",
        pattern: r"```(?:[a-zA-Z0-9+\-]*\n?)?([\s\S]*?)```",
        replacement: "$1",
        flags: "",
    },
    PresetRule {
        key: "remove_markdown_inline_code",
        label: "Markdown行内代码",
        pattern: r"`([^`]+)`",
        replacement: "$1",
        flags: "",
    },
    PresetRule {
        key: "remove_markdown_headers",
        label: "Markdown标题",
        pattern: r"^#{1,6}\s+(.*)$",
        replacement: "$1",
        flags: "m",
    },
    PresetRule {
        key: "remove_markdown_links",
        label: "Markdown链接",
        pattern: r"\[([^\]]+)\]\([^)]+\)",
        replacement: "$1",
        flags: "",
    },
    PresetRule {
        key: "remove_markdown_quotes",
        label: "Markdown引用",
        pattern: r"^>\s+(.*)$",
        replacement: "$1",
        flags: "m",
    },
    PresetRule {
        key: "remove_markdown_lists",
        label: "Markdown列表",
        pattern: r"^\s*[-*+]\s+(.*)$",
        replacement: "$1",
        flags: "m",
    },
    PresetRule {
        key: "remove_think_tag",
        label: "思考标签",
        pattern: r"<think>[\s\S]*?</think>",
        replacement: "",
        flags: "s",
    },
    PresetRule {
        key: "remove_all_html_tags",
        label: "HTML标签",
        pattern: r"<[^>]+>",
        replacement: "",
        flags: "",
    },
];

/// Looks up a catalog entry by its configuration key.
pub fn find(key: &str) -> Option<&'static PresetRule> {
    CATALOG.iter().find(|preset| preset.key == key)
}
