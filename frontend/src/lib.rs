pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the router.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from(format!("logger already set: {}", err)));
    }
    log::info!("Starting leave manager frontend");

    // Resolve the API base URL before the first request needs it.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
