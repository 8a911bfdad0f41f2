#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod models;
mod error;
mod config;
mod confirm;
mod ids;
mod draft;
mod summary;
mod list;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    let level = config.log_level().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    if let Some(err) = config_error {
        log::warn!("[Main] {}; using default config", err);
    }
    log::info!(
        "[Main] starting, locale={:?} seed_items={}",
        config.locale,
        config.seed_items
    );

    mount_to_body(move || view! { <App config=config /> });
}
