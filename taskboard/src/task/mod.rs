//! Task commands

mod add;
mod delete;
mod get;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use mv::MoveTask;
pub use update::UpdateTask;
