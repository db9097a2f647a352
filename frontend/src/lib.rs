pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting church admin frontend (wasm)");

    // Resolve the API base URL up front; requests made before it settles
    // await the same cached value.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
