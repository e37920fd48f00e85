//! What an executed operation hands back to its processor

use crate::LogEntry;

/// Outcome of `Execute::execute`
///
/// `Unlogged` covers both reads and mutations that found nothing to change,
/// so a processor can skip publishing state for either.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// State changed; the entry belongs in the activity log
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    /// Nothing changed. A failure may still carry an entry worth recording.
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Drop the log entry and keep the outcome
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Separate the outcome from its log entry
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// True when there is an entry to record
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    /// True when the operation changed state
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> LogEntry {
        LogEntry::new("add list", json!({"title": "x"}), json!({"id": "1"}), None, 0)
    }

    #[test]
    fn test_logged_into_result() {
        let result: ExecutionResult<i32, String> = ExecutionResult::Logged {
            value: 7,
            log_entry: entry(),
        };
        assert!(result.should_log());
        assert!(result.is_mutation());
        assert_eq!(result.into_result(), Ok(7));
    }

    #[test]
    fn test_unlogged_is_not_logged() {
        let result: ExecutionResult<i32, String> = ExecutionResult::Unlogged { value: 1 };
        assert!(!result.should_log());
        assert!(!result.is_mutation());
        let (value, log) = result.split();
        assert_eq!(value, Ok(1));
        assert!(log.is_none());
    }

    #[test]
    fn test_failed_with_and_without_log() {
        let logged: ExecutionResult<i32, String> = ExecutionResult::Failed {
            error: "boom".into(),
            log_entry: Some(entry()),
        };
        assert!(logged.should_log());

        let silent: ExecutionResult<i32, String> = ExecutionResult::Failed {
            error: "boom".into(),
            log_entry: None,
        };
        assert!(!silent.should_log());
        assert_eq!(silent.into_result(), Err("boom".to_string()));
    }
}
