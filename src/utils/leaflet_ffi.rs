// ============================================================================
// LEAFLET FFI - Foreign Function Interface para Leaflet (+ leaflet-rotate)
// ============================================================================
// Solo wrappers para la API JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // ---- L.Map ----
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type LeafletMapHandle;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(container_id: &str, options: &JsValue) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &LeafletMapHandle) -> f64;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMapHandle, center: &JsValue, zoom: f64, options: &JsValue) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMapHandle, bounds: &JsValue) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = hasLayer)]
    pub fn has_layer(this: &LeafletMapHandle, layer: &JsValue) -> bool;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMapHandle, layer: &JsValue) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LeafletMapHandle, layer: &JsValue) -> LeafletMapHandle;

    // ---- L.Marker ----
    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    #[derive(Debug, Clone)]
    pub type MarkerHandle;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn create_marker(latlng: &JsValue, options: &JsValue) -> MarkerHandle;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &MarkerHandle, html: &str) -> MarkerHandle;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &MarkerHandle) -> MarkerHandle;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &MarkerHandle, icon: &JsValue) -> MarkerHandle;

    #[wasm_bindgen(method)]
    pub fn on(this: &MarkerHandle, event: &str, handler: &js_sys::Function) -> MarkerHandle;

    // ---- Iconos ----
    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub fn create_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn create_div_icon(options: &JsValue) -> JsValue;

    // ---- Capas ----
    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    pub fn create_circle(latlng: &JsValue, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn create_tile_layer(url: &str, options: &JsValue) -> JsValue;
}

/// Helper: llamar a un método opcional del mapa (p.ej. `setBearing` de leaflet-rotate)
pub fn call_map_method(map: &LeafletMapHandle, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let function = js_sys::Reflect::get(map, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let array: js_sys::Array = args.iter().collect();
    function.apply(map, &array).ok()
}
