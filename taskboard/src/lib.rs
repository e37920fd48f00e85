//! In-memory kanban board state engine
//!
//! This crate holds a single board of ordered lists, each holding ordered
//! tasks, and applies every mutation atomically. Ranks are dense and
//! zero-based within each list and across the board's lists, and a task's
//! `list_id` always names the list that holds it.
//!
//! ## Overview
//!
//! - **Commands** - Every operation is a struct whose fields are its parameters
//! - **Copy-and-swap** - Mutations run against a private copy that is published
//!   only after the invariants check out
//! - **Snapshots** - Readers hold `Arc<Board>` and can subscribe to updates
//! - **Activity log** - Changes are recorded as `LogEntry` values, newest first
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{BoardConfig, BoardStore, TaskPatch};
//!
//! # fn example() -> taskboard::Result<()> {
//! let store = BoardStore::from_config(&BoardConfig::default())?.with_actor("ui[local]");
//!
//! // Add a task and move it to the top of "In Progress"
//! let board = store.add_task("todo", "Write docs", None)?;
//! let id = board.lists[0].tasks.last().map(|t| t.id.clone()).unwrap_or_default();
//! store.move_task(id.clone(), "doing", 0)?;
//!
//! store.update_task(id, TaskPatch::new().with_title("Write the docs"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure policy
//!
//! Commands naming an unknown list or task leave the board unchanged and
//! return the current snapshot. A list reorder that is not an exact
//! permutation fails with [`BoardError::InvalidPermutation`].

mod config;
pub mod defaults;
pub mod drag;
mod error;
pub mod order;
mod outcome;
mod processor;
mod store;
pub mod types;

// Command modules
pub mod board;
mod command;
pub mod list;
pub mod task;

#[cfg(test)]
mod test_support;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use command::BoardCommand;
pub use config::{BoardConfig, ConfigError};
pub use defaults::{default_board, seed_board};
pub use error::{BoardError, Result};
pub use processor::{BoardOperationProcessor, Processed, Rejected};
pub use store::BoardStore;

pub use types::{Board, BoardId, List, ListId, Task, TaskId, TaskPatch};
