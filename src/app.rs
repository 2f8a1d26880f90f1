//! Todo Widget App
//!
//! Root component: provides the configuration and mounts the list.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::config::WidgetConfig;

#[component]
pub fn App(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <main class="todo-widget">
            <TodoList />
        </main>
    }
}
