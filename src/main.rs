//! Todo Widget Entry Point

use leptos::prelude::*;
use todo_widget::{config, logger, App};

fn main() {
    console_error_panic_hook::set_once();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            logger::init(log::LevelFilter::Info);
            log::warn!(target: "app", "{}; using defaults", e);
            config::WidgetConfig::default()
        }
    };
    // Validated by load()
    logger::init(config.level_filter().unwrap_or(log::LevelFilter::Info));
    log::info!(target: "app", "mounting with {} seed todos", config.seed.len());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
