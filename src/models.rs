//! Frontend Models
//!
//! Data structures owned by the todo list.

use serde::{Deserialize, Serialize};

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the list; creation timestamp in milliseconds
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Records the list starts with when no seed is configured
pub fn default_seed() -> Vec<Todo> {
    vec![
        Todo { id: 1, name: "Learn Lit".to_string(), completed: false },
        Todo { id: 2, name: "Learn React".to_string(), completed: true },
        Todo { id: 22, name: "Learn JS".to_string(), completed: true },
    ]
}
