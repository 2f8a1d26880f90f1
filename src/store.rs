//! Todo List State Store
//!
//! Uses Leptos reactive_stores; the list component owns one of these.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::events::TodoEvent;
use crate::models::Todo;
use crate::todos;

/// State owned by the list unit
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// The authoritative collection, in insertion order
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new(seed: Vec<Todo>) -> Self {
        Self { todos: seed }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the collection when an operation produced a new one
fn store_replace(store: &TodoStore, next: Option<Vec<Todo>>, op: &str) -> bool {
    match next {
        Some(next) => {
            log::debug!(target: "store", "{}: {} todos", op, next.len());
            *store.todos().write() = next;
            true
        }
        None => {
            log::trace!(target: "store", "{}: no change", op);
            false
        }
    }
}

/// Add a todo from raw input; returns false for blank input
pub fn store_add_todo(store: &TodoStore, raw_name: &str, now_ms: u64) -> bool {
    let next = todos::with_added(&store.todos().read_untracked(), raw_name, now_ms);
    store_replace(store, next, "add")
}

pub fn store_remove_todo(store: &TodoStore, id: u64) -> bool {
    let next = todos::without(&store.todos().read_untracked(), id);
    store_replace(store, next, "remove")
}

pub fn store_toggle_todo(store: &TodoStore, id: u64) -> bool {
    let next = todos::with_toggled(&store.todos().read_untracked(), id);
    store_replace(store, next, "toggle")
}

pub fn store_rename_todo(store: &TodoStore, id: u64, name: &str) -> bool {
    let next = todos::with_renamed(&store.todos().read_untracked(), id, name);
    store_replace(store, next, "rename")
}

/// Apply an upward notification from a row
pub fn store_apply(store: &TodoStore, event: TodoEvent) -> bool {
    match event {
        TodoEvent::Remove(id) => store_remove_todo(store, id),
        TodoEvent::Toggle(id) => store_toggle_todo(store, id),
        TodoEvent::Rename { id, name } => store_rename_todo(store, id, &name),
    }
}

/// Current snapshot of a single todo, if it is still in the list
pub fn store_find_todo(store: &TodoStore, id: u64) -> Option<Todo> {
    store.todos().read().iter().find(|todo| todo.id == id).cloned()
}

/// One todo as a memo: re-runs the lookup on every collection change, but only
/// notifies readers when this todo itself changed
pub fn store_todo_memo(store: &TodoStore, id: u64) -> Memo<Option<Todo>> {
    let store = *store;
    Memo::new(move |_| store_find_todo(&store, id))
}
