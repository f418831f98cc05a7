//! WebAssembly entry point for the brochure site.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Installs the panic hook and console logger, then mounts the app.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }

    log::info!("mounting BeeHive site");
    leptos::mount::mount_to_body(App);
}
