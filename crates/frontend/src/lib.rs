pub mod app;
pub mod config;
pub mod layout;
pub mod pages;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_warning) = config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }

    app::start(&config);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
