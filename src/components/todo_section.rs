//! Todo Section Component
//!
//! One titled list of todo rows ("Current Todos" or "Completed Todos").

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::events::TodoEvent;
use crate::models::Todo;
use crate::store::{store_todo_memo, use_todo_store};

#[component]
pub fn TodoSection(
    #[prop(into)] title: String,
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] on_event: Callback<TodoEvent>,
) -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="wrapper">
            <h2>{title}</h2>
            <For
                each=move || todos.get()
                key=|todo| todo.id
                children=move |todo: Todo| {
                    let id = todo.id;
                    // Rows follow the store so renames show up under a stable key
                    let row = store_todo_memo(&store, id);
                    view! { <TodoItem todo=row on_event=on_event /> }
                }
            />
        </ul>
    }
}
