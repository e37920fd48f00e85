//! The `Operation` and `Execute` traits

use crate::{ExecutionResult, ParamMeta};
use serde_json::Value;

/// Metadata every command carries: what it does and what it takes
pub trait Operation {
    /// The action, e.g. "move"
    fn verb(&self) -> &'static str;

    /// The target entity, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Human-readable summary
    fn description(&self) -> &'static str;

    /// Parameters derived from the struct's fields
    fn parameters(&self) -> &'static [ParamMeta];

    /// Canonical op string used in log entries ("verb noun")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a mutable context
///
/// Execution is synchronous: operations never block on I/O, so the caller
/// decides how writes are serialized.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{operation, LogEntry, ParamType};
    use serde_json::json;

    /// Appends to a counter list
    #[operation(verb = "push", noun = "counter", description = "Push a value")]
    #[derive(Debug)]
    struct PushValue {
        /// The value to push
        value: i64,
        /// Optional label
        label: Option<String>,
    }

    impl Execute<Vec<i64>, String> for PushValue {
        fn execute(&self, ctx: &mut Vec<i64>) -> ExecutionResult<Value, String> {
            if self.value < 0 {
                return ExecutionResult::Failed {
                    error: "negative".into(),
                    log_entry: None,
                };
            }
            ctx.push(self.value);
            let value = json!({ "len": ctx.len(), "label": self.label });
            ExecutionResult::Logged {
                value: value.clone(),
                log_entry: LogEntry::new(self.op_string(), json!({}), value, None, 0),
            }
        }
    }

    #[test]
    fn test_macro_metadata() {
        let op = PushValue {
            value: 1,
            label: None,
        };
        assert_eq!(op.verb(), "push");
        assert_eq!(op.noun(), "counter");
        assert_eq!(op.op_string(), "push counter");
        assert_eq!(op.description(), "Push a value");

        let params = op.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "value");
        assert!(params[0].required);
        assert_eq!(params[0].param_type, ParamType::Integer);
        assert_eq!(params[0].description, "The value to push");
        assert_eq!(params[1].name, "label");
        assert!(!params[1].required);
        assert_eq!(params[1].param_type, ParamType::String);
    }

    #[test]
    fn test_execute_mutates_context() {
        let mut ctx = vec![];
        let result = PushValue {
            value: 4,
            label: Some("a".into()),
        }
        .execute(&mut ctx);
        assert!(result.is_mutation());
        assert_eq!(ctx, vec![4]);

        let failed = PushValue {
            value: -1,
            label: None,
        }
        .execute(&mut ctx)
        .into_result();
        assert_eq!(failed, Err("negative".to_string()));
        assert_eq!(ctx, vec![4]);
    }
}
