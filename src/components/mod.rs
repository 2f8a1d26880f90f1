//! UI Components
//!
//! The todo row, the list that owns the todos, and their building blocks.

mod todo_item;
mod new_todo_input;
mod todo_section;
mod todo_list;

pub use todo_item::{edit_control, EditControl, EditState, TodoItem};
pub use new_todo_input::NewTodoInput;
pub use todo_section::TodoSection;
pub use todo_list::TodoList;
