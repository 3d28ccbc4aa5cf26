//! Message segment model for the pre-delivery hook.
//!
//! A structured message is an ordered sequence of segments. Only the plain
//! text segments are subject to filtering; everything else is carried
//! through untouched and unexamined.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One component of a structured outbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Plain chat text, subject to filtering.
    Plain { text: String },
    /// Any non-text component (image, record, embed). Opaque to the filter.
    Other { payload: Value },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain { text: text.into() }
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Segment::Plain { text } => Some(text),
            Segment::Other { .. } => None,
        }
    }
}
