//! TaskFeed Frontend Entry Point

mod app;
mod components;
mod context;
mod platform;

use app::App;
use leptos::prelude::*;
use taskfeed_core::AppConfig;

use crate::platform::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&BrowserStorage);
    if let Err(e) = console_logger::init_logger("TaskFeed", config.level_filter()) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] Starting with posts from {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
