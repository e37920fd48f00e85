//! Board fixtures for unit tests

use crate::types::{Board, List, ListId, Task};
use chrono::Utc;

/// Build a normalized board from `(list id, task titles)` pairs
pub(crate) fn board_with(lists: &[(&str, &[&str])]) -> Board {
    let mut board = Board::new("main-board", "Test");
    for (order, (id, titles)) in lists.iter().enumerate() {
        let mut list = List::with_id(*id, id.to_uppercase(), order);
        for (rank, title) in titles.iter().enumerate() {
            list.tasks
                .push(Task::new(ListId::from_string(*id), *title, rank, Utc::now()));
        }
        board.lists.push(list);
    }
    board
}

/// Task titles of a list, in sequence order
pub(crate) fn titles(board: &Board, list: &str) -> Vec<String> {
    board
        .find_list(&ListId::from_string(list))
        .map(|l| l.tasks.iter().map(|t| t.title.clone()).collect())
        .unwrap_or_default()
}

/// Look up a task id by title
pub(crate) fn task_id(board: &Board, title: &str) -> crate::types::TaskId {
    board
        .tasks()
        .find(|t| t.title == title)
        .map(|t| t.id.clone())
        .expect("fixture task exists")
}
