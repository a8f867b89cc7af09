// Utils compartidos

pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;
