//! New Todo Input Component
//!
//! Text input that submits its contents on the activation key.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Input for new todos.
///
/// `on_submit` returns whether the text was accepted; only then is the input cleared.
#[component]
pub fn NewTodoInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] activation_key: String,
    #[prop(into)] on_submit: Callback<String, bool>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != activation_key {
            return;
        }
        if on_submit.run(new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <input
            type="text"
            id="todoInput"
            placeholder=placeholder
            prop:value=move || new_text.get()
            on:input=move |ev| {
                if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                    set_new_text.set(input.value());
                }
            }
            on:keydown=on_keydown
        />
    }
}
