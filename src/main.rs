//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;
mod sync;

use app::{bootstrap_todos, App};
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::load();
    let level = config.as_ref().map(ClientConfig::log_level).unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    let config = config.unwrap_or_else(|e| {
        log::warn!("[APP] {}, using defaults", e);
        ClientConfig::default()
    });
    let todos = bootstrap_todos();

    mount_to_body(move || view! { <App config=config todos=todos /> });
}
