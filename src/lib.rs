pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Remitos PWA iniciando...");

    yew::Renderer::<App>::new().render();
    Ok(())
}
