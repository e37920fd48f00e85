//! Core types for the board engine

mod board;
mod ids;
mod task;

pub use board::{Board, List};
pub use ids::{BoardId, ListId, TaskId};
pub use task::{Task, TaskPatch};

pub(crate) use task::deserialize_some;
