// ============================================================================
// GEOLOCATION SERVICE - Posición del dispositivo (una petición por llamada)
// ============================================================================
// Política de reintento: un solo reintento, en baja precisión, aceptando una
// posición cacheada más vieja y con el mismo timeout.
// ============================================================================

use crate::config::GeoConfig;
use crate::error::GeoErrorKind;
use crate::models::GeoFix;

/// Opciones de `getCurrentPosition`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl PositionRequest {
    /// Primer intento: alta precisión, sin caché
    pub fn precise(config: &GeoConfig) -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: config.timeout_ms,
            maximum_age_ms: 0,
        }
    }

    /// Reintento: baja precisión, caché más tolerante, mismo timeout
    pub fn relaxed(config: &GeoConfig) -> Self {
        Self {
            high_accuracy: false,
            timeout_ms: config.timeout_ms,
            maximum_age_ms: config.retry_maximum_age_ms,
        }
    }
}

/// Acceso a la geolocalización del dispositivo
#[allow(async_fn_in_trait)]
pub trait Geolocator {
    /// ¿Existe la API de geolocalización?
    fn is_supported(&self) -> bool;

    /// ¿Contexto seguro (HTTPS / localhost)?
    fn is_secure_context(&self) -> bool;

    /// Una sola petición; el timeout lo aplica la propia API
    async fn current_position(&self, request: PositionRequest) -> Result<GeoFix, GeoErrorKind>;
}

/// Pedir la posición con la política de un reintento
pub async fn request_position_with_fallback<G: Geolocator + ?Sized>(
    geo: &G,
    config: &GeoConfig,
) -> Result<GeoFix, GeoErrorKind> {
    match geo.current_position(PositionRequest::precise(config)).await {
        Ok(fix) => Ok(fix),
        Err(first) => {
            log::warn!("⚠️ [GEO] Alta precisión falló ({}), reintentando en baja precisión", first);
            geo.current_position(PositionRequest::relaxed(config)).await
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebGeolocator;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::models::LatLng;
    use js_sys::{Object, Promise, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// `navigator.geolocation` del navegador
    #[derive(Clone, Default)]
    pub struct WebGeolocator;

    fn get_f64(target: &JsValue, key: &str) -> Option<f64> {
        Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
    }

    fn options_object(request: &PositionRequest) -> Result<Object, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"enableHighAccuracy".into(), &JsValue::from_bool(request.high_accuracy))?;
        Reflect::set(&options, &"timeout".into(), &JsValue::from_f64(request.timeout_ms as f64))?;
        Reflect::set(&options, &"maximumAge".into(), &JsValue::from_f64(request.maximum_age_ms as f64))?;
        Ok(options)
    }

    fn parse_fix(position: &JsValue) -> Option<GeoFix> {
        let coords = Reflect::get(position, &"coords".into()).ok()?;
        Some(GeoFix {
            position: LatLng::new(get_f64(&coords, "latitude")?, get_f64(&coords, "longitude")?),
            accuracy_m: get_f64(&coords, "accuracy").unwrap_or(0.0),
        })
    }

    impl Geolocator for WebGeolocator {
        fn is_supported(&self) -> bool {
            web_sys::window()
                .map(|w| Reflect::has(&w.navigator(), &"geolocation".into()).unwrap_or(false))
                .unwrap_or(false)
        }

        fn is_secure_context(&self) -> bool {
            web_sys::window().map(|w| w.is_secure_context()).unwrap_or(false)
        }

        async fn current_position(&self, request: PositionRequest) -> Result<GeoFix, GeoErrorKind> {
            let geolocation = web_sys::window()
                .ok_or(GeoErrorKind::Unknown)?
                .navigator()
                .geolocation()
                .map_err(|_| GeoErrorKind::PositionUnavailable)?;
            let options = options_object(&request).map_err(|_| GeoErrorKind::Unknown)?;

            // Promise que resuelve con la posición o rechaza con el error
            let mut register = |resolve: js_sys::Function, reject: js_sys::Function| {
                let on_success = Closure::once_into_js(move |position: JsValue| {
                    let _ = resolve.call1(&JsValue::NULL, &position);
                });
                let on_error = Closure::once_into_js(move |error: JsValue| {
                    let _ = reject.call1(&JsValue::NULL, &error);
                });
                if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
                    on_success.unchecked_ref(),
                    Some(on_error.unchecked_ref()),
                    options.unchecked_ref(),
                ) {
                    log::error!("❌ [GEO] getCurrentPosition lanzó: {:?}", e);
                }
            };
            let promise = Promise::new(&mut register);

            match JsFuture::from(promise).await {
                Ok(position) => parse_fix(&position).ok_or(GeoErrorKind::Unknown),
                Err(error) => {
                    let code = get_f64(&error, "code").unwrap_or(0.0) as u16;
                    Err(GeoErrorKind::from_code(code))
                }
            }
        }
    }
}
