use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

use crate::node::identity::value_fingerprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindDirection {
    /// Node state -> JSON value
    Get,
    /// JSON value -> node state
    Set,
}

impl BindDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindDirection::Get => "get",
            BindDirection::Set => "set",
        }
    }
}

/// One dispatched binding step, written as a JSONL record.
///
/// Scalar payloads are recorded as a SHA-1 digest rather than verbatim, so
/// traces stay small and value contents stay out of log files.
#[derive(Debug, Serialize)]
pub struct BindEvent {
    pub timestamp_ms: u128,

    pub direction: String,
    pub node: String,

    pub role: Option<String>,
    pub tag: String,

    pub scalar_digest: Option<String>,
}

impl BindEvent {
    pub fn now(
        direction: BindDirection,
        node: impl ToString,
        role: Option<&str>,
        tag: impl ToString,
    ) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            direction: direction.as_str().to_string(),
            node: node.to_string(),
            role: role.map(str::to_string),
            tag: tag.to_string(),
            scalar_digest: None,
        }
    }

    /// Attach a digest when the value is a scalar; containers are covered by
    /// the events of their children.
    pub fn with_scalar(mut self, value: &Value) -> Self {
        if !value.is_object() && !value.is_array() {
            self.scalar_digest = Some(value_fingerprint(&value.to_string()));
        }
        self
    }
}
