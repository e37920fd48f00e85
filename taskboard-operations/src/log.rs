//! Activity records produced by logged operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ulid::Ulid;

/// One recorded operation: what ran, with which input, and what came out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Sortable unique id, serialized as a ULID string
    pub id: Ulid,

    pub timestamp: DateTime<Utc>,

    /// Canonical op string, e.g. "move task"
    pub op: String,

    /// The command's fields as JSON
    pub input: Value,

    /// The result value, or `{"error": message}` for failures
    pub output: Value,

    /// Who issued the operation, e.g. "ui[session]"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: Ulid::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Record a failed operation with its error message as output
    pub fn failure(
        op: impl Into<String>,
        input: Value,
        error: impl std::fmt::Display,
        duration_ms: u64,
    ) -> Self {
        Self::new(op, input, json!({ "error": error.to_string() }), None, duration_ms)
    }

    /// Attribute the entry to an actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The error message, if this entry records a failure
    pub fn error(&self) -> Option<&str> {
        self.output.get("error").and_then(Value::as_str)
    }
}
