//! The board store: single-writer copy-and-swap over an immutable snapshot
//!
//! Every mutation takes the writer lock, clones the current board, runs the
//! command against the private copy, checks the invariants and publishes the
//! copy as the new snapshot. Readers hold `Arc<Board>` snapshots and never
//! see a half-applied command. A command that fails or changes nothing
//! leaves the published snapshot untouched.

use crate::command::BoardCommand;
use crate::config::{BoardConfig, DEFAULT_ACTIVITY_CAPACITY};
use crate::defaults::seed_board;
use crate::error::{BoardError, Result};
use crate::list::{AddList, DeleteList, MoveList, ReorderLists, UpdateList};
use crate::order::verify;
use crate::processor::{BoardOperationProcessor, Processed, Rejected};
use crate::task::{AddTask, DeleteTask, MoveTask, UpdateTask};
use crate::types::{Board, ListId, Task, TaskId, TaskPatch};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use taskboard_operations::{Execute, LogEntry, Operation};
use tokio::sync::watch;
use tracing::{debug, error};

/// Owns the board and serializes every write
pub struct BoardStore {
    snapshot: watch::Sender<Arc<Board>>,
    writer: Mutex<()>,
    activity: Mutex<VecDeque<LogEntry>>,
    activity_capacity: usize,
    verify_invariants: bool,
    processor: BoardOperationProcessor,
}

impl BoardStore {
    /// Create a store over an existing board. The board must already satisfy
    /// the ordering invariants.
    pub fn new(board: Board) -> Result<Self> {
        verify(&board)?;
        let (snapshot, _) = watch::channel(Arc::new(board));
        Ok(Self {
            snapshot,
            writer: Mutex::new(()),
            activity: Mutex::new(VecDeque::new()),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            verify_invariants: true,
            processor: BoardOperationProcessor::new(),
        })
    }

    /// Build the store described by a configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let board = if config.seed {
            seed_board(config.id.as_str(), config.title.clone())
        } else {
            Board::new(config.id.as_str(), config.title.clone())
        };
        debug!(
            board = %board.id,
            lists = board.lists.len(),
            tasks = board.task_count(),
            "initialized board store"
        );

        let mut store = Self::new(board)?;
        store.activity_capacity = config.activity_capacity;
        store.verify_invariants = config.verify_invariants;
        Ok(store)
    }

    /// Load configuration from defaults and the environment, then build the store
    pub fn from_env() -> Result<Self> {
        Self::from_config(&BoardConfig::load()?)
    }

    /// Attribute activity log entries to an actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.processor = BoardOperationProcessor::with_actor(actor);
        self
    }

    /// The current board
    pub fn snapshot(&self) -> Arc<Board> {
        self.snapshot.borrow().clone()
    }

    /// Watch for new snapshots
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.snapshot.subscribe()
    }

    /// Apply a command and return the resulting snapshot.
    ///
    /// Unknown ids are no-ops and return the current snapshot.
    pub fn apply<O>(&self, operation: &O) -> Result<Arc<Board>>
    where
        O: Execute<Board, BoardError> + ?Sized,
    {
        self.commit(operation).map(|(_, board)| board)
    }

    /// Apply a command and return its result value
    pub fn execute<O>(&self, operation: &O) -> Result<Value>
    where
        O: Execute<Board, BoardError> + ?Sized,
    {
        self.commit(operation).map(|(value, _)| value)
    }

    /// Apply a JSON-dispatched command
    pub fn dispatch(&self, command: &BoardCommand) -> Result<Value> {
        if command.is_read_only() {
            let mut board = Board::clone(&self.snapshot());
            return self
                .processor
                .execute(command.as_operation(), &mut board)
                .map(|processed| processed.value);
        }
        self.execute(command.as_operation())
    }

    fn commit<O>(&self, operation: &O) -> Result<(Value, Arc<Board>)>
    where
        O: Execute<Board, BoardError> + ?Sized,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.snapshot();
        let mut working = Board::clone(&current);

        match self.processor.process(operation, &mut working) {
            Ok(Processed {
                value,
                changed: false,
                ..
            }) => Ok((value, current)),
            Ok(Processed {
                value, log_entry, ..
            }) => {
                if self.verify_invariants {
                    if let Err(e) = verify(&working) {
                        error!(op = %operation.op_string(), error = %e, "discarding board that breaks invariants");
                        return Err(e);
                    }
                }

                let next = Arc::new(working);
                self.snapshot.send_replace(next.clone());
                if let Some(entry) = log_entry {
                    self.record(entry);
                }
                Ok((value, next))
            }
            Err(Rejected { error, log_entry }) => {
                if let Some(entry) = log_entry {
                    self.record(entry);
                }
                Err(error)
            }
        }
    }

    fn record(&self, entry: LogEntry) {
        let mut activity = self.activity.lock().unwrap_or_else(PoisonError::into_inner);
        activity.push_front(entry);
        activity.truncate(self.activity_capacity);
    }

    /// The most recent activity log entries, newest first
    pub fn activity(&self, limit: usize) -> Vec<LogEntry> {
        self.activity
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn add_list(&self, title: impl Into<String>) -> Result<Arc<Board>> {
        self.apply(&AddList::new(title))
    }

    pub fn update_list_title(
        &self,
        id: impl Into<ListId>,
        title: impl Into<String>,
    ) -> Result<Arc<Board>> {
        self.apply(&UpdateList::new(id, title))
    }

    /// Delete a list with all of its tasks
    pub fn delete_list(&self, id: impl Into<ListId>) -> Result<Arc<Board>> {
        self.apply(&DeleteList::new(id))
    }

    pub fn add_task(
        &self,
        list_id: impl Into<ListId>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Arc<Board>> {
        let mut op = AddTask::new(list_id, title);
        op.description = description;
        self.apply(&op)
    }

    pub fn update_task(&self, id: impl Into<TaskId>, patch: TaskPatch) -> Result<Arc<Board>> {
        self.apply(&UpdateTask::from_patch(id, patch))
    }

    pub fn delete_task(&self, id: impl Into<TaskId>) -> Result<Arc<Board>> {
        self.apply(&DeleteTask::new(id))
    }

    /// Move a task to an absolute index in a list, measured after removal
    pub fn move_task(
        &self,
        id: impl Into<TaskId>,
        list_id: impl Into<ListId>,
        index: usize,
    ) -> Result<Arc<Board>> {
        self.apply(&MoveTask::new(id, list_id, index))
    }

    /// Replace the list order. Fails with `InvalidPermutation` unless `ids`
    /// is exactly a permutation of the board's list ids.
    pub fn reorder_lists<I, T>(&self, ids: I) -> Result<Arc<Board>>
    where
        I: IntoIterator<Item = T>,
        T: Into<ListId>,
    {
        self.apply(&ReorderLists::new(ids))
    }

    pub fn move_list(&self, id: impl Into<ListId>, index: usize) -> Result<Arc<Board>> {
        self.apply(&MoveList::new(id, index))
    }

    /// Read a task from the current snapshot
    pub fn get_task(&self, id: &TaskId) -> Option<Task> {
        self.snapshot().find_task(id).cloned()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = self.snapshot();
        f.debug_struct("BoardStore")
            .field("board", &board.id)
            .field("lists", &board.lists.len())
            .field("tasks", &board.task_count())
            .field("activity_capacity", &self.activity_capacity)
            .field("verify_invariants", &self.verify_invariants)
            .finish()
    }
}
