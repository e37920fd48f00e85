//! Gesture resolution: turn drag events into board commands
//!
//! A drag names its items by id only; whether an id is a list or a task is
//! decided against the current snapshot. Hovering over a list appends the
//! dragged task to that list's end, and the precise slot is only chosen on
//! drop.

use crate::command::BoardCommand;
use crate::list::MoveList;
use crate::task::MoveTask;
use crate::types::{Board, ListId, Task, TaskId};
use tracing::trace;

/// The task being dragged, for the drag preview
pub fn drag_start(board: &Board, active: &str) -> Option<Task> {
    board.find_task(&TaskId::from_string(active)).cloned()
}

/// Provisional placement while hovering
///
/// Only a task hovering over a list produces a command: a `MoveTask` to the
/// end of that list.
pub fn drag_over(board: &Board, active: &str, over: &str) -> Option<BoardCommand> {
    if active == over {
        return None;
    }

    let task = TaskId::from_string(active);
    board.find_task(&task)?;
    let list = board.find_list(&ListId::from_string(over))?;

    trace!(task = active, list = over, "drag over list");
    Some(MoveTask::new(task, list.id.clone(), list.tasks.len()).into())
}

/// Final placement on drop
///
/// A list dropped on another list moves to that list's index. A task
/// dropped on a sibling task in the same list moves to the sibling's index.
/// Anything else is ignored.
pub fn drag_end(board: &Board, active: &str, over: Option<&str>) -> Option<BoardCommand> {
    let over = over?;
    if active == over {
        return None;
    }

    let from_list = board.list_index(&ListId::from_string(active));
    let to_list = board.list_index(&ListId::from_string(over));
    if let (Some(old_index), Some(new_index)) = (from_list, to_list) {
        if old_index == new_index {
            return None;
        }
        return Some(MoveList::new(active, new_index).into());
    }

    let (active_list, _) = board.locate_task(&TaskId::from_string(active))?;
    let (over_list, over_index) = board.locate_task(&TaskId::from_string(over))?;
    if active_list != over_list {
        return None;
    }

    let list_id = board.lists[over_list].id.clone();
    Some(MoveTask::new(active, list_id, over_index).into())
}
