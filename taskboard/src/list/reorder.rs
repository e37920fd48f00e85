//! ReorderLists command

use crate::error::{BoardError, Result};
use crate::order::renormalize;
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use taskboard_operations::{operation, Execute, ExecutionResult};
use tracing::warn;

/// Replace the list order with an explicit permutation of list ids
#[operation(
    verb = "reorder",
    noun = "lists",
    description = "Replace the board's list order with a permutation of its list ids"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReorderLists {
    /// Every list id on the board, in the new order
    pub ids: Vec<ListId>,
}

impl ReorderLists {
    /// Create a new ReorderLists command
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Reject anything but an exact permutation of the current list ids
    fn validate(&self, board: &Board) -> Result<()> {
        if self.ids.len() != board.lists.len() {
            return Err(BoardError::invalid_permutation(format!(
                "expected {} list ids, got {}",
                board.lists.len(),
                self.ids.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.ids.len());
        for id in &self.ids {
            if !seen.insert(id) {
                return Err(BoardError::invalid_permutation(format!(
                    "duplicate list id: {}",
                    id
                )));
            }
            if board.list_index(id).is_none() {
                return Err(BoardError::invalid_permutation(format!(
                    "unknown list id: {}",
                    id
                )));
            }
        }

        Ok(())
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        if let Err(error) = self.validate(board) {
            warn!(%error, "rejected list reorder");
            return Err(error);
        }

        let unchanged = board
            .lists
            .iter()
            .zip(&self.ids)
            .all(|(list, id)| &list.id == id);
        if unchanged {
            return Ok(Outcome::Unchanged(serde_json::json!({ "ids": self.ids })));
        }

        let mut remaining = std::mem::take(&mut board.lists);
        for id in &self.ids {
            // validate() guarantees each id is present exactly once
            if let Some(index) = remaining.iter().position(|l| &l.id == id) {
                board.lists.push(remaining.swap_remove(index));
            }
        }
        renormalize(&mut board.lists);

        Ok(Outcome::Changed(serde_json::json!({ "ids": self.ids })))
    }
}

impl Execute<Board, BoardError> for ReorderLists {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}
