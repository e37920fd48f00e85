//! Rank maintenance: renormalization and invariant checks.
//!
//! Ranks are dense and zero-based within each sibling set, and a sibling's
//! position in its sequence always equals its rank. Every mutation that
//! inserts or removes runs [`renormalize`] over the affected sequences
//! before the board is published.

use crate::error::{BoardError, Result};
use crate::types::{Board, List, Task};
use std::collections::HashSet;
use tracing::trace;

/// An entity with a position among its siblings
pub trait Ranked {
    fn rank(&self) -> usize;
    fn set_rank(&mut self, rank: usize);
}

impl Ranked for Task {
    fn rank(&self) -> usize {
        self.order
    }

    fn set_rank(&mut self, rank: usize) {
        self.order = rank;
    }
}

impl Ranked for List {
    fn rank(&self) -> usize {
        self.order
    }

    fn set_rank(&mut self, rank: usize) {
        self.order = rank;
    }
}

/// Set each item's rank to its index. Returns how many ranks changed.
pub fn renormalize<T: Ranked>(items: &mut [T]) -> usize {
    let mut changed = 0;
    for (index, item) in items.iter_mut().enumerate() {
        if item.rank() != index {
            item.set_rank(index);
            changed += 1;
        }
    }
    trace!(len = items.len(), changed, "renormalized sibling ranks");
    changed
}

/// Clamp an insertion index into `[0, len]`
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len)
}

/// Remove the item at `from`, then insert it at `to` measured against the
/// shortened sequence (clamped). Returns the index it landed on.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> usize {
    let item = items.remove(from);
    let to = clamp_index(to, items.len());
    items.insert(to, item);
    to
}

/// Check every ordering and ownership invariant of the board
pub fn verify(board: &Board) -> Result<()> {
    let mut list_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for (index, list) in board.lists.iter().enumerate() {
        if list.order != index {
            return Err(BoardError::invariant(format!(
                "list '{}' at position {} has order {}",
                list.id, index, list.order
            )));
        }
        if !list_ids.insert(&list.id) {
            return Err(BoardError::invariant(format!(
                "duplicate list id: {}",
                list.id
            )));
        }

        for (position, task) in list.tasks.iter().enumerate() {
            if task.order != position {
                return Err(BoardError::invariant(format!(
                    "task '{}' at position {} of list '{}' has order {}",
                    task.id, position, list.id, task.order
                )));
            }
            if task.list_id != list.id {
                return Err(BoardError::invariant(format!(
                    "task '{}' is held by list '{}' but points at '{}'",
                    task.id, list.id, task.list_id
                )));
            }
            if !task_ids.insert(&task.id) {
                return Err(BoardError::invariant(format!(
                    "duplicate task id: {}",
                    task.id
                )));
            }
        }
    }

    Ok(())
}
