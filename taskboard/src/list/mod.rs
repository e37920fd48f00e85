//! List commands

mod add;
mod delete;
mod mv;
mod reorder;
mod update;

pub use add::AddList;
pub use delete::DeleteList;
pub use mv::MoveList;
pub use reorder::ReorderLists;
pub use update::UpdateList;
