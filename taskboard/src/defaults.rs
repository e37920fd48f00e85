//! The seed board installed at startup

use crate::types::{Board, BoardId, List, Task};
use chrono::Utc;

/// Default board id
pub const DEFAULT_BOARD_ID: &str = "main-board";

/// Default board title
pub const DEFAULT_BOARD_TITLE: &str = "My Task Board";

/// Seed lists as (id, title, [(task title, description)])
const SEED: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "todo",
        "To Do",
        &[
            (
                "Design system setup",
                "Create a consistent design system for the project",
            ),
            (
                "User authentication",
                "Implement login and registration functionality",
            ),
        ],
    ),
    (
        "doing",
        "In Progress",
        &[(
            "Task board interface",
            "Build the main task management interface",
        )],
    ),
    (
        "done",
        "Done",
        &[(
            "Project setup",
            "Initialize the project with necessary dependencies",
        )],
    ),
];

/// Build the default board: To Do, In Progress and Done with sample tasks
pub fn seed_board(id: impl Into<BoardId>, title: impl Into<String>) -> Board {
    let now = Utc::now();
    let mut board = Board::new(id, title);

    for (order, (list_id, list_title, tasks)) in SEED.iter().enumerate() {
        let mut list = List::with_id(*list_id, *list_title, order);
        for (rank, (task_title, description)) in tasks.iter().enumerate() {
            let task = Task::new(list.id.clone(), *task_title, rank, now)
                .with_description(*description);
            list.tasks.push(task);
        }
        board.lists.push(list);
    }

    board
}

/// The default board with default id and title
pub fn default_board() -> Board {
    seed_board(DEFAULT_BOARD_ID, DEFAULT_BOARD_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::verify;

    #[test]
    fn test_default_board_lists() {
        let board = default_board();
        assert_eq!(board.id, DEFAULT_BOARD_ID);
        assert_eq!(board.title, DEFAULT_BOARD_TITLE);

        let ids: Vec<_> = board.lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "doing", "done"]);
        assert_eq!(board.lists[1].title, "In Progress");
        assert_eq!(board.task_count(), 4);
    }

    #[test]
    fn test_seed_board_is_normalized() {
        let board = seed_board("b", "Seeded");
        verify(&board).unwrap();
        assert!(board
            .tasks()
            .all(|t| t.description.as_deref().is_some_and(|d| !d.is_empty())));
    }
}
