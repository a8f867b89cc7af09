// Módulo de mapas: trait común + implementación por plataforma

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::{MapRenderer, PinSpec, PinColor, MapError, check_position};
