//! Todo Widget
//!
//! A todo list split into current and completed sections, rendered with Leptos.

pub mod models;
pub mod todos;
pub mod events;
pub mod store;
pub mod config;
pub mod logger;
pub mod components;
pub mod app;

pub use app::App;
