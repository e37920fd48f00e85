//! JSON-dispatchable board commands
//!
//! ```json
//! {"op": "move_task", "id": "01J...", "list_id": "doing", "index": 0}
//! ```

use crate::board::GetBoard;
use crate::error::BoardError;
use crate::list::{AddList, DeleteList, MoveList, ReorderLists, UpdateList};
use crate::task::{AddTask, DeleteTask, GetTask, MoveTask, UpdateTask};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use taskboard_operations::Execute;

/// Any board command, tagged by `op`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    GetBoard,
    AddList(AddList),
    UpdateList(UpdateList),
    DeleteList(DeleteList),
    ReorderLists(ReorderLists),
    MoveList(MoveList),
    GetTask(GetTask),
    AddTask(AddTask),
    UpdateTask(UpdateTask),
    DeleteTask(DeleteTask),
    MoveTask(MoveTask),
}

impl BoardCommand {
    /// The command as an executable operation
    pub fn as_operation(&self) -> &dyn Execute<Board, BoardError> {
        match self {
            Self::GetBoard => &GetBoard,
            Self::AddList(op) => op,
            Self::UpdateList(op) => op,
            Self::DeleteList(op) => op,
            Self::ReorderLists(op) => op,
            Self::MoveList(op) => op,
            Self::GetTask(op) => op,
            Self::AddTask(op) => op,
            Self::UpdateTask(op) => op,
            Self::DeleteTask(op) => op,
            Self::MoveTask(op) => op,
        }
    }

    /// True for commands that never change the board
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::GetBoard | Self::GetTask(_))
    }
}

macro_rules! impl_from_command {
    ($($op:ident),* $(,)?) => {
        $(
            impl From<$op> for BoardCommand {
                fn from(op: $op) -> Self {
                    Self::$op(op)
                }
            }
        )*
    };
}

impl_from_command!(
    AddList,
    UpdateList,
    DeleteList,
    ReorderLists,
    MoveList,
    GetTask,
    AddTask,
    UpdateTask,
    DeleteTask,
    MoveTask,
);

impl From<GetBoard> for BoardCommand {
    fn from(_: GetBoard) -> Self {
        Self::GetBoard
    }
}
