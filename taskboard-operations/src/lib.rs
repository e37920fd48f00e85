//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Operations are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[operation(verb = "add", noun = "list", description = "Append a list to the board")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddList {
//!     /// The list title
//!     pub title: String,
//! }
//!
//! impl Execute<Board, BoardError> for AddList {
//!     fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
//!         // mutate the working copy, return Logged, Unlogged or Failed
//!     }
//! }
//! ```

// Lets `#[operation]` expansions resolve `taskboard_operations::` inside this crate's tests
extern crate self as taskboard_operations;

mod execution_result;
mod log;
mod operation;
mod parameter;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use parameter::{ParamMeta, ParamType};
pub use processor::OperationProcessor;

pub use taskboard_operations_macros::operation;

pub use serde_json::Value;
