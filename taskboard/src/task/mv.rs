//! MoveTask command
//!
//! The single reordering primitive behind every task drag. The index is an
//! absolute position in the target list measured after the task has been
//! removed from its source, so dragging a task past its own slot never
//! lands one position off.

use crate::error::{BoardError, Result};
use crate::order::{clamp_index, move_item, renormalize};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId, TaskId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};
use tracing::debug;

/// Move a task to a position in a (possibly different) list
#[operation(
    verb = "move",
    noun = "task",
    description = "Move a task to a position in the same or another list"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The target list
    pub list_id: ListId,
    /// Target position after removal, clamped to the list length
    pub index: usize,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(id: impl Into<TaskId>, list_id: impl Into<ListId>, index: usize) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            index,
        }
    }

    /// Move to the end of a list (the drag-over placement)
    pub fn to_end(board: &Board, id: impl Into<TaskId>, list_id: impl Into<ListId>) -> Self {
        let list_id = list_id.into();
        let index = board
            .find_list(&list_id)
            .map(|l| l.tasks.len())
            .unwrap_or(0);
        Self::new(id, list_id, index)
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let (source, from) = board
            .locate_task(&self.id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: self.id.to_string(),
            })?;
        // Resolve the target before touching the source so a bad target
        // can never drop the task
        let target = board
            .list_index(&self.list_id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.list_id.to_string(),
            })?;

        let now = Utc::now();

        let landed = if source == target {
            let list = &mut board.lists[source];
            let to = clamp_index(self.index, list.tasks.len() - 1);
            if to == from {
                let task = &list.tasks[from];
                return Ok(Outcome::Unchanged(serde_json::to_value(task)?));
            }

            let landed = move_item(&mut list.tasks, from, to);
            list.tasks[landed].touch(now);
            renormalize(&mut list.tasks);
            landed
        } else {
            let mut task = board.lists[source].tasks.remove(from);
            renormalize(&mut board.lists[source].tasks);

            let list = &mut board.lists[target];
            task.list_id = list.id.clone();
            task.touch(now);

            let to = clamp_index(self.index, list.tasks.len());
            list.tasks.insert(to, task);
            renormalize(&mut list.tasks);
            to
        };

        debug!(
            task = %self.id,
            from_list = %board.lists[source].id,
            to_list = %board.lists[target].id,
            index = landed,
            "moved task"
        );

        let mut value = serde_json::to_value(&board.lists[target].tasks[landed])?;
        value["fromListId"] = serde_json::json!(&board.lists[source].id);
        Ok(Outcome::Changed(value))
    }
}

impl Execute<Board, BoardError> for MoveTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::verify;
    use crate::test_support::{board_with, task_id, titles};

    #[test]
    fn test_move_task_across_lists() {
        let mut board = board_with(&[("a", &["t1", "t2"]), ("b", &[])]);
        let t1 = task_id(&board, "t1");

        let result = MoveTask::new(t1.clone(), "b", 0)
            .execute(&mut board)
            .into_result()
            .unwrap();

        assert_eq!(result["listId"], "b");
        assert_eq!(result["fromListId"], "a");
        assert_eq!(titles(&board, "a"), vec!["t2"]);
        assert_eq!(titles(&board, "b"), vec!["t1"]);
        assert_eq!(board.lists[0].tasks[0].order, 0);
        assert_eq!(board.lists[1].tasks[0].order, 0);
        assert_eq!(board.find_task(&t1).unwrap().list_id, "b");
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_task_same_list_uses_post_removal_index() {
        let mut board = board_with(&[("a", &["t1", "t2", "t3"])]);
        let t1 = task_id(&board, "t1");

        MoveTask::new(t1, "a", 2).execute(&mut board);

        assert_eq!(titles(&board, "a"), vec!["t2", "t3", "t1"]);
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_task_same_list_backward() {
        let mut board = board_with(&[("a", &["t1", "t2", "t3"])]);
        let t3 = task_id(&board, "t3");

        MoveTask::new(t3, "a", 0).execute(&mut board);

        assert_eq!(titles(&board, "a"), vec!["t3", "t1", "t2"]);
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_task_onto_own_slot_is_unchanged() {
        let mut board = board_with(&[("a", &["t1", "t2", "t3"])]);
        let before = board.clone();
        let t2 = task_id(&board, "t2");

        let result = MoveTask::new(t2, "a", 1).execute(&mut board);

        assert!(!result.is_mutation());
        assert!(!result.should_log());
        // Deep-equal, updated_at included
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_last_task_past_end_is_unchanged() {
        let mut board = board_with(&[("a", &["t1", "t2"])]);
        let before = board.clone();
        let t2 = task_id(&board, "t2");

        let result = MoveTask::new(t2, "a", 10).execute(&mut board);

        assert!(!result.is_mutation());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_task_clamps_out_of_range_index() {
        let mut board = board_with(&[("a", &["t1"]), ("b", &["u1", "u2"])]);
        let t1 = task_id(&board, "t1");

        MoveTask::new(t1, "b", 1_000).execute(&mut board);

        assert_eq!(titles(&board, "b"), vec!["u1", "u2", "t1"]);
        assert!(board.lists[0].tasks.is_empty());
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_task_touches_only_the_moved_task() {
        let mut board = board_with(&[("a", &["t1", "t2"]), ("b", &["u1"])]);
        let before = board.clone();
        let t1 = task_id(&board, "t1");
        let u1 = task_id(&board, "u1");

        MoveTask::new(t1.clone(), "b", 0).execute(&mut board);

        let moved = board.find_task(&t1).unwrap();
        assert!(moved.updated_at >= before.find_task(&t1).unwrap().updated_at);
        assert_eq!(moved.created_at, before.find_task(&t1).unwrap().created_at);
        let sibling = board.find_task(&u1).unwrap();
        assert_eq!(sibling.order, 1);
        assert_eq!(sibling.updated_at, before.find_task(&u1).unwrap().updated_at);
    }

    #[test]
    fn test_move_task_to_end_helper() {
        let mut board = board_with(&[("a", &["t1"]), ("b", &["u1", "u2"])]);
        let t1 = task_id(&board, "t1");

        let cmd = MoveTask::to_end(&board, t1, "b");
        assert_eq!(cmd.index, 2);
        cmd.execute(&mut board);

        assert_eq!(titles(&board, "b"), vec!["u1", "u2", "t1"]);
    }

    #[test]
    fn test_move_task_unknown_target_keeps_task() {
        let mut board = board_with(&[("a", &["t1"])]);
        let before = board.clone();
        let t1 = task_id(&board, "t1");

        let result = MoveTask::new(t1, "nowhere", 0).execute(&mut board).into_result();

        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_task_unknown_task() {
        let mut board = board_with(&[("a", &["t1"])]);
        let result = MoveTask::new("ghost", "a", 0).execute(&mut board).into_result();
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
