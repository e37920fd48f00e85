//! Operation processing: execute, then attribute the log entry

use crate::{Execute, LogEntry};
use serde_json::Value;

/// Runs operations against a context on behalf of an actor
pub trait OperationProcessor<C, E> {
    /// Who log entries are attributed to
    fn actor(&self) -> Option<&str> {
        None
    }

    /// Execute the operation and split out its log entry, stamped with the actor
    fn run<O>(&self, operation: &O, ctx: &mut C) -> (Result<Value, E>, Option<LogEntry>)
    where
        O: Execute<C, E> + ?Sized,
    {
        let (result, log_entry) = operation.execute(ctx).split();
        let log_entry = match (log_entry, self.actor()) {
            (Some(entry), Some(actor)) => Some(entry.with_actor(actor)),
            (entry, _) => entry,
        };
        (result, log_entry)
    }
}
