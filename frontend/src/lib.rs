mod api;
mod components;
pub mod config;
mod pages;
mod paths;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Condado frontend (wasm)");

    // Resolved in the background; API calls await the same cached value.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
