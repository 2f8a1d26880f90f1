//! Todo Item Component
//!
//! A single todo row: checkbox, name or edit field, edit/save and remove buttons.

use leptos::prelude::*;

use crate::events::TodoEvent;
use crate::models::Todo;

/// The edit/save button shown for a row, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditControl {
    Edit,
    Save,
}

/// Completed todos cannot be edited, so they get no edit/save button at all
pub fn edit_control(completed: bool, editing: bool) -> Option<EditControl> {
    match (completed, editing) {
        (true, _) => None,
        (false, true) => Some(EditControl::Save),
        (false, false) => Some(EditControl::Edit),
    }
}

/// Local `Viewing <-> Editing` state of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditState {
    pub editing: bool,
}

impl EditState {
    /// Enter edit mode; ignored while the row has no todo
    pub fn start_edit(self, has_todo: bool) -> Self {
        Self { editing: self.editing || has_todo }
    }

    pub fn confirm_edit(self) -> Self {
        Self { editing: false }
    }
}

/// A single todo row.
///
/// Never changes the todo it displays; every intent goes to `on_event`.
#[component]
pub fn TodoItem(
    #[prop(into)] todo: Signal<Option<Todo>>,
    #[prop(into)] on_event: Callback<TodoEvent>,
) -> impl IntoView {
    let (edit_state, set_edit_state) = signal(EditState::default());

    let id = move || todo.with(|t| t.as_ref().map(|t| t.id));
    let name = move || todo.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let completed = move || todo.with(|t| t.as_ref().is_some_and(|t| t.completed));
    let editing = move || edit_state.get().editing;

    let start_edit = move |_: web_sys::MouseEvent| {
        let has_todo = id().is_some();
        set_edit_state.update(|state| *state = state.start_edit(has_todo));
    };
    let confirm_edit = move |_: web_sys::MouseEvent| set_edit_state.update(|state| *state = state.confirm_edit());

    let rename_draft = move |ev: web_sys::Event| {
        if let Some(id) = id() {
            on_event.run(TodoEvent::Rename { id, name: event_target_value(&ev) });
        }
    };
    let toggle_completion = move |_: web_sys::Event| {
        if let Some(id) = id() {
            on_event.run(TodoEvent::Toggle(id));
        }
    };
    let remove = move |_: web_sys::MouseEvent| {
        if let Some(id) = id() {
            on_event.run(TodoEvent::Remove(id));
        }
    };

    view! {
        <Show
            when=move || id().is_some()
            fallback=|| view! { <li class="todo-item empty"></li> }
        >
            <li class="todo-item">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=toggle_completion
                />

                // Name, or the edit field while editing
                {move || if editing() {
                    view! {
                        <input
                            type="text"
                            class="editTextField"
                            prop:value=name
                            on:input=rename_draft
                        />
                    }.into_any()
                } else {
                    view! { <p class="todoName">{name}</p> }.into_any()
                }}

                {move || edit_control(completed(), editing()).map(|control| match control {
                    EditControl::Save => view! {
                        <button class="saveBtn" on:click=confirm_edit>"Save"</button>
                    }.into_any(),
                    EditControl::Edit => view! {
                        <button class="editBtn" on:click=start_edit>"Edit"</button>
                    }.into_any(),
                })}

                <button class="deleteBtn" on:click=remove>"Remove"</button>
            </li>
        </Show>
    }
}
