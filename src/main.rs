#![allow(warnings)]
//! Party Games Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod mansion;
mod mansion_app;
mod memory;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_browser();
    leptos::logging::log!("[APP] mounting {:?} page (debug={})", config.page, config.debug);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
