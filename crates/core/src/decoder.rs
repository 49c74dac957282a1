//! Response decoding
//!
//! The panel only ever answers with JSON. A payload that is already
//! structured (injected by a caller or a test double) passes through
//! untouched; raw text must parse as JSON or the call fails with
//! [`PanelError::Decode`].

use btpanel_domain::{PanelError, Result};
use serde_json::Value;

const EXCERPT_CHARS: usize = 120;

/// Transport output handed to [`decode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Raw(String),
    Structured(Value),
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

pub fn decode(payload: Payload) -> Result<Value> {
    match payload {
        Payload::Structured(value) => Ok(value),
        Payload::Raw(text) => serde_json::from_str(&text).map_err(|err| {
            tracing::debug!(body_len = text.len(), error = %err, "response.decode_failed");
            PanelError::Decode(format!(
                "response is not valid JSON ({err}); body starts with {:?}",
                excerpt(&text)
            ))
        }),
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}
