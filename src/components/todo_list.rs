//! Todo List Component
//!
//! Owns the todo collection and renders it as current and completed sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoInput, TodoSection};
use crate::config::use_config;
use crate::events::TodoEvent;
use crate::models::Todo;
use crate::store::{store_add_todo, store_apply, TodoState, TodoStateStoreFields};
use crate::todos::{dedup_by_id, partition};

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// The todo list.
///
/// `seed` replaces the configured initial todos when given. Todos repeating an
/// earlier id are dropped.
#[component]
pub fn TodoList(#[prop(optional)] seed: Option<Vec<Todo>>) -> impl IntoView {
    let config = use_config();
    let (seed, dropped) = dedup_by_id(seed.unwrap_or_else(|| config.seed.clone()));
    if !dropped.is_empty() {
        log::warn!(target: "list", "dropped seed todos with duplicate ids {:?}", dropped);
    }
    log::info!(target: "list", "starting with {} todos", seed.len());

    let store = Store::new(TodoState::new(seed));
    provide_context(store);

    // Recomputed after every change to the collection, read at render time
    let views = Memo::new(move |_| partition(&store.todos().read()));
    let incomplete = Signal::derive(move || views.with(|v| v.incomplete.clone()));
    let complete = Signal::derive(move || views.with(|v| v.complete.clone()));

    let on_event = Callback::new(move |event: TodoEvent| {
        log::debug!(target: "list", "{:?}", event);
        store_apply(&store, event);
    });

    let on_submit = Callback::new(move |raw: String| {
        let added = store_add_todo(&store, &raw, now_ms());
        if !added {
            log::debug!(target: "list", "ignored blank todo");
        }
        added
    });

    view! {
        <div class="todo-list">
            <NewTodoInput
                placeholder=config.placeholder.clone()
                activation_key=config.activation_key.clone()
                on_submit=on_submit
            />
            <div class="sections">
                <TodoSection title=config.current_title.clone() todos=incomplete on_event=on_event />
                <TodoSection title=config.completed_title.clone() todos=complete on_event=on_event />
            </div>
        </div>
    }
}
