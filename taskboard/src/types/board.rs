//! Board-level types: Board and List

use super::ids::{BoardId, ListId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// The board: a title plus its lists, ordered by ascending `order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

/// A list (column) of tasks, ordered by ascending `order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    /// Zero-based rank among the board's lists
    pub order: usize,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl List {
    /// Create an empty list with a fresh id at rank `order`
    pub fn new(title: impl Into<String>, order: usize) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            order,
            tasks: Vec::new(),
        }
    }

    /// Create an empty list with a fixed id (used for seeded lists)
    pub fn with_id(id: impl Into<ListId>, title: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order,
            tasks: Vec::new(),
        }
    }

    /// Position of a task in this list's sequence
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

impl Board {
    /// Create an empty board
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            lists: Vec::new(),
        }
    }

    /// Position of a list in the board's sequence
    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// Find a list by ID
    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Find a list by ID, mutably
    pub fn find_list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == id)
    }

    /// Locate a task as (list index, task index)
    pub fn locate_task(&self, id: &TaskId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.task_index(id).map(|ti| (li, ti)))
    }

    /// Find a task by ID anywhere on the board
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.locate_task(id)
            .map(|(li, ti)| &self.lists[li].tasks[ti])
    }

    /// Find a task by ID anywhere on the board, mutably
    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        let (li, ti) = self.locate_task(id)?;
        Some(&mut self.lists[li].tasks[ti])
    }

    /// Total number of tasks across all lists
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|l| l.tasks.len()).sum()
    }

    /// Iterate every task, list by list
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.lists.iter().flat_map(|l| l.tasks.iter())
    }
}
