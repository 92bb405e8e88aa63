//! Kanban Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod draft;
mod logging;
mod models;
mod store;
mod sync;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("[APP] Task endpoint: {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
