//! HighTechMG Site Entry Point

mod animation;
mod app;
mod components;
mod content;
mod context;
mod effects;
mod error;
mod filter;
mod modal;
mod models;
mod nav;
mod pages;
mod pointer;
mod scroll;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    let registries: Vec<_> = content::Registry::ALL.iter().map(|r| r.name()).collect();
    log::info!(
        "starting site ({} gallery pages, registries: {})",
        pages::GALLERY_PAGES.len(),
        registries.join(", ")
    );

    mount_to_body(App);
}
