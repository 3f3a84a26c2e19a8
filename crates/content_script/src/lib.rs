pub mod app;
pub mod pages;
pub mod selection;
pub mod shared;

use contracts::shared::config::ExtensionConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match app::load_stored_config() {
        Ok(config) => (config, None),
        Err(err) => (ExtensionConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);

    if let Some(err) = config_error {
        log::warn!("Ignoring stored configuration: {}", err);
    }
    if let Err(err) = app::run(&config) {
        log::error!("Content script not started: {}", err);
    }
}
