//! Upward Notifications
//!
//! Intents a todo row reports to the list that owns it.

/// Message sent from a `TodoItem` to its owning list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    /// Remove the todo with this id
    Remove(u64),
    /// Flip the completion flag of the todo with this id
    Toggle(u64),
    /// Replace the name of the todo with this id
    Rename { id: u64, name: String },
}

