// ============================================================================
// SPOT FINDER - MAPA + LISTA DE SPOTS (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Models: Spot, Venue, coordenadas
// - State: datos cargados + filtro
// - ViewModels: filtro, registro de pines, selección, ubicación
// - Views: lista, popups, página (traits + implementación DOM)
// - Maps: trait MapRenderer + adaptador Leaflet
// - Services: carga de JSON + geolocalización
// El núcleo no depende del navegador y se prueba en nativo; lo web va bajo
// cfg(target_arch = "wasm32").
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod maps;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web_app;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if config::CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Spot Finder - Rust + Leaflet");

    web_app::start()
}
