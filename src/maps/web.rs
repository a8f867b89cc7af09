use std::cell::RefCell;
use std::rc::Rc;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use crate::config::MapConfig;
use crate::models::{GeoFix, LatLng, LatLngBounds};
use crate::utils::leaflet_ffi::*;
use super::{check_position, MapError, MapRenderer, PinColor, PinSpec};

const USER_COLOR: &str = "#2f7ea8";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom_control: bool,
    scroll_wheel_zoom: bool,
    rotate: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    max_zoom: f64,
    attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions {
    icon_url: String,
    icon_retina_url: String,
    shadow_url: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
    popup_anchor: [i32; 2],
    shadow_size: [u32; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions {
    class_name: &'static str,
    icon_size: [u32; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions {
    radius: f64,
    color: &'static str,
    fill_color: &'static str,
    fill_opacity: f64,
    weight: u32,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Library(e.to_string()))
}

fn latlng_js(position: LatLng) -> Result<JsValue, MapError> {
    to_js(&[position.lat, position.lng])
}

fn icon_for(color: PinColor) -> Result<JsValue, MapError> {
    let options = IconOptions {
        icon_url: color.icon_url(),
        icon_retina_url: color.icon_retina_url(),
        shadow_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-shadow.png",
        icon_size: [25, 41],
        icon_anchor: [12, 41],
        popup_anchor: [1, -34],
        shadow_size: [41, 41],
    };
    Ok(create_icon(&to_js(&options)?))
}

/// Renderizador de mapas para web usando Leaflet
#[derive(Clone)]
pub struct LeafletMap {
    map: LeafletMapHandle,
    // Marcador + círculo de precisión del usuario (a lo sumo uno de cada)
    user_layers: Rc<RefCell<Vec<JsValue>>>,
    on_pin_click: Rc<dyn Fn(String)>,
    // Iconos ya construidos por color
    icons: Rc<RefCell<Vec<(PinColor, JsValue)>>>,
}

impl LeafletMap {
    /// Inicializar el mapa en `container_id` con la capa de tiles configurada
    pub fn new(container_id: &str, config: &MapConfig, on_pin_click: Rc<dyn Fn(String)>) -> Result<Self, MapError> {
        log::info!("🗺️ [MAP] Inicializando Leaflet en #{}", container_id);
        let options = MapOptions {
            zoom_control: true,
            scroll_wheel_zoom: true,
            rotate: true,
        };
        let map = create_map(container_id, &to_js(&options)?);

        let tiles = TileOptions {
            max_zoom: config.max_zoom,
            attribution: "&copy; OpenStreetMap contributors",
        };
        map.add_layer(&create_tile_layer(&config.tile_url, &to_js(&tiles)?));

        Ok(Self {
            map,
            user_layers: Rc::new(RefCell::new(Vec::new())),
            on_pin_click,
            icons: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn icon(&self, color: PinColor) -> Result<JsValue, MapError> {
        if let Some((_, icon)) = self.icons.borrow().iter().find(|(c, _)| *c == color) {
            return Ok(icon.clone());
        }
        let icon = icon_for(color)?;
        self.icons.borrow_mut().push((color, icon.clone()));
        Ok(icon)
    }
}

impl MapRenderer for LeafletMap {
    type Pin = MarkerHandle;

    fn create_pin(&mut self, spec: &PinSpec) -> Result<MarkerHandle, MapError> {
        let position = check_position(spec.position)?;
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &self.icon(spec.color)?)
            .map_err(|e| MapError::Library(format!("{:?}", e)))?;

        let marker = create_marker(&latlng_js(position)?, &options);
        marker.bind_popup(&spec.popup_html);

        // Listener registrado una sola vez: el pin vive toda la sesión
        let id = spec.id.clone();
        let on_click = self.on_pin_click.clone();
        let closure = Closure::wrap(Box::new(move |_e: JsValue| {
            on_click(id.clone());
        }) as Box<dyn FnMut(JsValue)>);
        marker.on("click", closure.as_ref().unchecked_ref());
        closure.forget();

        Ok(marker)
    }

    fn add_pin(&mut self, pin: &MarkerHandle) {
        self.map.add_layer(pin);
    }

    fn remove_pin(&mut self, pin: &MarkerHandle) {
        self.map.remove_layer(pin);
    }

    fn has_pin(&self, pin: &MarkerHandle) -> bool {
        self.map.has_layer(pin)
    }

    fn set_pin_color(&mut self, pin: &MarkerHandle, color: PinColor) {
        match self.icon(color) {
            Ok(icon) => {
                pin.set_icon(&icon);
            }
            Err(e) => log::error!("❌ [MAP] Icono {}: {}", color.token(), e),
        }
    }

    fn show_popup(&mut self, pin: &MarkerHandle) {
        pin.open_popup();
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }

    fn ease_to(&mut self, center: LatLng, zoom: f64) {
        match latlng_js(center) {
            Ok(latlng) => {
                let options = js_sys::Object::new();
                if let Err(e) = js_sys::Reflect::set(&options, &"animate".into(), &JsValue::TRUE) {
                    log::warn!("⚠️ [MAP] Opción animate: {:?}", e);
                }
                self.map.set_view(&latlng, zoom, &options);
            }
            Err(e) => log::error!("❌ [MAP] ease_to: {}", e),
        }
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        match to_js(&bounds.corners()) {
            Ok(corners) => {
                self.map.fit_bounds(&corners);
            }
            Err(e) => log::error!("❌ [MAP] fit_bounds: {}", e),
        }
    }

    fn bearing(&self) -> f64 {
        call_map_method(&self.map, "getBearing", &[])
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set_bearing(&mut self, degrees: f64) {
        if call_map_method(&self.map, "setBearing", &[JsValue::from_f64(degrees)]).is_none() {
            log::warn!("⚠️ [MAP] setBearing no disponible (¿falta leaflet-rotate?)");
        }
    }

    fn place_user_marker(&mut self, fix: &GeoFix, label: &str) -> Result<(), MapError> {
        let position = latlng_js(check_position(fix.position)?)?;

        let icon = create_div_icon(&to_js(&DivIconOptions {
            class_name: "user-location",
            icon_size: [14, 14],
        })?);
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &icon)
            .map_err(|e| MapError::Library(format!("{:?}", e)))?;
        let marker = create_marker(&position, &options);
        marker.bind_popup(label);

        let circle = create_circle(
            &position,
            &to_js(&CircleOptions {
                radius: fix.accuracy_m,
                color: USER_COLOR,
                fill_color: USER_COLOR,
                fill_opacity: 0.15,
                weight: 1,
            })?,
        );

        self.map.add_layer(&marker);
        self.map.add_layer(&circle);
        let mut layers = self.user_layers.borrow_mut();
        layers.push(marker.into());
        layers.push(circle);
        Ok(())
    }

    fn remove_user_marker(&mut self) {
        for layer in self.user_layers.borrow_mut().drain(..) {
            self.map.remove_layer(&layer);
        }
    }
}
