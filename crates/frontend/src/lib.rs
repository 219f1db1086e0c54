pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::task::spawn_local;
use shared::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // config.toml may lower the log level and point the app at another API
    spawn_local(async {
        let resolved = config::load_config().await;
        log::set_max_level(resolved.log.level().to_level_filter());
        log::info!(
            "API: {}",
            resolved.api.base_url.as_deref().unwrap_or("same host")
        );
        config::install(resolved);

        leptos::mount::mount_to_body(app::App);
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
