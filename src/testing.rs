// ============================================================================
// TEST DOUBLES - Mapa, lista, página y geolocalización en memoria
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use crate::error::GeoErrorKind;
use crate::maps::{MapError, MapRenderer, PinColor, PinSpec};
use crate::models::{GeoFix, LatLng, LatLngBounds};
use crate::services::{Geolocator, PositionRequest};
use crate::views::{ListSurface, PageChrome, SpotCard};

pub fn pin_spec(id: &str, color: PinColor) -> PinSpec {
    PinSpec {
        id: id.to_string(),
        position: LatLng::new(35.0, 135.0),
        popup_html: format!("<strong>{}</strong>", id),
        color,
    }
}

struct FakePin {
    id: String,
    color: PinColor,
    on_map: bool,
}

/// Mapa en memoria; el handle de un pin es su índice
pub struct FakeMap {
    pins: Vec<FakePin>,
    pub zoom: f64,
    pub bearing: f64,
    pub add_calls: usize,
    pub remove_calls: usize,
    pub popups_opened: Vec<String>,
    pub eased_to: Vec<(LatLng, f64)>,
    pub fitted: Vec<LatLngBounds>,
    /// Marcadores del usuario actualmente en el mapa
    pub user_markers: usize,
    /// Marcadores del usuario colocados en total
    pub user_markers_placed: usize,
}

impl FakeMap {
    pub fn new() -> Self {
        Self {
            pins: Vec::new(),
            zoom: 12.0,
            bearing: 0.0,
            add_calls: 0,
            remove_calls: 0,
            popups_opened: Vec::new(),
            eased_to: Vec::new(),
            fitted: Vec::new(),
            user_markers: 0,
            user_markers_placed: 0,
        }
    }

    fn find(&self, id: &str) -> Option<&FakePin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn on_map_ids(&self) -> HashSet<String> {
        self.pins.iter().filter(|p| p.on_map).map(|p| p.id.clone()).collect()
    }

    pub fn color_of(&self, id: &str) -> Option<PinColor> {
        self.find(id).map(|p| p.color)
    }

    pub fn created_pins(&self) -> usize {
        self.pins.len()
    }

    /// Simula que la librería quitó el pin sin pasar por el registro
    pub fn detach_externally(&mut self, id: &str) {
        if let Some(pin) = self.pins.iter_mut().find(|p| p.id == id) {
            pin.on_map = false;
        }
    }
}

impl MapRenderer for FakeMap {
    type Pin = usize;

    fn create_pin(&mut self, spec: &PinSpec) -> Result<usize, MapError> {
        crate::maps::check_position(spec.position)?;
        self.pins.push(FakePin {
            id: spec.id.clone(),
            color: spec.color,
            on_map: false,
        });
        Ok(self.pins.len() - 1)
    }

    fn add_pin(&mut self, pin: &usize) {
        self.add_calls += 1;
        self.pins[*pin].on_map = true;
    }

    fn remove_pin(&mut self, pin: &usize) {
        self.remove_calls += 1;
        self.pins[*pin].on_map = false;
    }

    fn has_pin(&self, pin: &usize) -> bool {
        self.pins[*pin].on_map
    }

    fn set_pin_color(&mut self, pin: &usize, color: PinColor) {
        self.pins[*pin].color = color;
    }

    fn show_popup(&mut self, pin: &usize) {
        let id = self.pins[*pin].id.clone();
        self.popups_opened.push(id);
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn ease_to(&mut self, center: LatLng, zoom: f64) {
        self.zoom = zoom;
        self.eased_to.push((center, zoom));
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.fitted.push(*bounds);
    }

    fn bearing(&self) -> f64 {
        self.bearing
    }

    fn set_bearing(&mut self, degrees: f64) {
        self.bearing = degrees;
    }

    fn place_user_marker(&mut self, fix: &GeoFix, _label: &str) -> Result<(), MapError> {
        crate::maps::check_position(fix.position)?;
        self.user_markers += 1;
        self.user_markers_placed += 1;
        Ok(())
    }

    fn remove_user_marker(&mut self) {
        self.user_markers = 0;
    }
}

/// Lista en memoria
#[derive(Default)]
pub struct FakeList {
    pub placeholder: Option<String>,
    pub cards: Vec<SpotCard>,
    pub renders: usize,
}

impl FakeList {
    pub fn active_ids(&self) -> Vec<String> {
        self.cards.iter().filter(|c| c.active).map(|c| c.id.clone()).collect()
    }
}

impl ListSurface for FakeList {
    fn show_placeholder(&mut self, message: &str) {
        self.renders += 1;
        self.cards.clear();
        self.placeholder = Some(message.to_string());
    }

    fn show_cards(&mut self, cards: &[SpotCard]) {
        self.renders += 1;
        self.placeholder = None;
        self.cards = cards.to_vec();
    }

    fn set_card_active(&mut self, id: &str, active: bool) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.active = active;
        }
    }
}

/// Página en memoria
#[derive(Default)]
pub struct FakePage {
    pub small_viewport: Cell<bool>,
    pub modal_open: Cell<bool>,
    pub map_scrolled: Cell<usize>,
    pub locate_busy: Cell<bool>,
    pub locate_label: RefCell<String>,
    pub busy_history: RefCell<Vec<bool>>,
    pub notifications: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn mobile() -> Self {
        let page = Self::default();
        page.small_viewport.set(true);
        page
    }

    pub fn busy_transitions(&self) -> Vec<bool> {
        self.busy_history.borrow().clone()
    }
}

impl PageChrome for FakePage {
    fn is_small_viewport(&self) -> bool {
        self.small_viewport.get()
    }

    fn scroll_map_into_view(&self) {
        self.map_scrolled.set(self.map_scrolled.get() + 1);
    }

    fn is_list_modal_open(&self) -> bool {
        self.modal_open.get()
    }

    fn open_list_modal(&self) {
        self.modal_open.set(true);
    }

    fn close_list_modal(&self) {
        self.modal_open.set(false);
    }

    fn set_locate_busy(&self, busy: bool, label: &str) {
        self.locate_busy.set(busy);
        *self.locate_label.borrow_mut() = label.to_string();
        self.busy_history.borrow_mut().push(busy);
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}

/// Geolocalización con respuestas predefinidas (en orden)
pub struct ScriptedGeolocator {
    supported: bool,
    secure: bool,
    responses: RefCell<VecDeque<Result<GeoFix, GeoErrorKind>>>,
    requests: RefCell<Vec<PositionRequest>>,
}

impl ScriptedGeolocator {
    pub fn new(responses: Vec<Result<GeoFix, GeoErrorKind>>) -> Self {
        Self {
            supported: true,
            secure: true,
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn fix(lat: f64, lng: f64) -> GeoFix {
        GeoFix {
            position: LatLng::new(lat, lng),
            accuracy_m: 25.0,
        }
    }

    pub fn insecure(mut self) -> Self {
        self.secure = false;
        self
    }

    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    pub fn requests(&self) -> Vec<PositionRequest> {
        self.requests.borrow().clone()
    }
}

impl Geolocator for ScriptedGeolocator {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn is_secure_context(&self) -> bool {
        self.secure
    }

    async fn current_position(&self, request: PositionRequest) -> Result<GeoFix, GeoErrorKind> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(GeoErrorKind::Unknown))
    }
}
