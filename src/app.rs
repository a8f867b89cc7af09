// ============================================================================
// APP - Estado explícito de la página + acciones del usuario
// ============================================================================
// Un solo dueño (SpotFinder) para datos, filtro, pines y selección. El mapa,
// la lista y la página se pasan en cada llamada: la capa web los guarda aparte
// y puede clonar el mapa para las tareas async.
// ============================================================================

use std::collections::HashSet;
use crate::config::AppConfig;
use crate::maps::{MapRenderer, PinColor, PinSpec};
use crate::models::{LatLng, LatLngBounds, Spot, VENUE_ID};
use crate::state::{DataStore, FilterState};
use crate::viewmodels::{FilterViewModel, LocationViewModel, MarkerRegistry, SelectionViewModel, SyncReport};
use crate::views::{build_spot_popup, build_venue_popup, ListRenderer, ListSurface, PageChrome};

pub struct SpotFinder<M: MapRenderer> {
    config: AppConfig,
    store: DataStore,
    filter: FilterState,
    registry: MarkerRegistry<M::Pin>,
    selection: SelectionViewModel,
    loaded: bool,
}

impl<M: MapRenderer> SpotFinder<M> {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: DataStore::default(),
            filter: FilterState::default(),
            registry: MarkerRegistry::new(),
            selection: SelectionViewModel::new(),
            loaded: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn registry(&self) -> &MarkerRegistry<M::Pin> {
        &self.registry
    }

    pub fn active_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn lang(&self) -> &str {
        &self.config.language
    }

    /// Primer (y único) volcado de datos: crea los pines, encuadra y pinta la lista
    pub fn load<L: ListSurface + ?Sized>(&mut self, store: DataStore, map: &mut M, list: &mut L) {
        if self.loaded {
            log::warn!("⚠️ [APP] Datos ya cargados, ignorando segunda carga");
            return;
        }
        self.store = store;
        self.loaded = true;

        for spot in self.store.spots() {
            let spec = PinSpec {
                id: spot.id.clone(),
                position: spot.position(),
                popup_html: build_spot_popup(spot, &self.config.language),
                color: PinColor::SPOT,
            };
            if let Err(e) = self.registry.register(map, spec) {
                log::warn!("⚠️ [MAP] Spot {} sin pin: {}", spot.id, e);
            }
        }
        if let Some(venue) = self.store.venue() {
            let spec = PinSpec {
                id: VENUE_ID.to_string(),
                position: venue.position(),
                popup_html: build_venue_popup(venue, &self.config.language),
                color: PinColor::VENUE,
            };
            if let Err(e) = self.registry.register(map, spec) {
                log::warn!("⚠️ [MAP] Venue sin pin: {}", e);
            }
        }

        self.fit_all(map);
        self.apply_filter(map, list);
        log::info!("✅ [APP] {} pines registrados", self.registry.len());
    }

    /// Encuadrar todos los spots + venue con padding
    pub fn fit_all(&self, map: &mut M) {
        if let Some(bounds) = LatLngBounds::from_points(&self.store.anchor_points()) {
            map.fit_bounds(&bounds.pad(self.config.map_config.fit_padding));
        }
    }

    pub fn show_load_failure<L: ListSurface + ?Sized>(&self, list: &mut L) {
        ListRenderer::render_load_failure(list, self.lang());
    }

    pub fn set_query<L: ListSurface + ?Sized>(&mut self, query: &str, map: &mut M, list: &mut L) {
        if self.filter.set_query(query) {
            self.apply_filter(map, list);
        }
    }

    pub fn set_category<L: ListSurface + ?Sized>(&mut self, category: Option<&str>, map: &mut M, list: &mut L) {
        if self.filter.set_category(category) {
            self.apply_filter(map, list);
        }
    }

    /// Items que pasan el filtro actual, en orden
    pub fn visible_items(&self) -> Vec<Spot> {
        let items = self.store.list_items(self.config.ui_config.venue_in_list);
        FilterViewModel::filter_spots(&items, self.filter.query(), self.filter.category())
    }

    /// Ids que deben tener pin en el mapa
    pub fn visible_ids(&self, items: &[Spot]) -> HashSet<String> {
        let mut ids: HashSet<String> = items.iter().map(|s| s.id.clone()).collect();
        if !self.config.ui_config.venue_in_list && self.store.venue().is_some() {
            ids.insert(VENUE_ID.to_string());
        }
        ids
    }

    /// Recalcular el subconjunto visible: pines y lista
    pub fn apply_filter<L: ListSurface + ?Sized>(&mut self, map: &mut M, list: &mut L) -> SyncReport {
        if !self.loaded {
            return SyncReport::default();
        }
        let items = self.visible_items();
        let visible = self.visible_ids(&items);
        let report = self.registry.sync(map, &visible);
        ListRenderer::render(list, &items, self.selection.active_id(), &self.config.language);
        report
    }

    pub fn category_options(&self) -> Vec<String> {
        FilterViewModel::category_options(self.store.spots())
    }

    /// Click en un pin: solo mover la selección (el popup lo abre la librería)
    pub fn select<L: ListSurface + ?Sized>(&mut self, id: &str, map: &mut M, list: &mut L) -> bool {
        self.selection.select(id, &mut self.registry, map, list)
    }

    /// Click en una card: seleccionar, abrir popup, centrar y, en móvil, volver al mapa
    pub fn focus_spot<L, P>(&mut self, id: &str, map: &mut M, list: &mut L, page: &P) -> bool
    where
        L: ListSurface + ?Sized,
        P: PageChrome + ?Sized,
    {
        if !self.selection.select(id, &mut self.registry, map, list) {
            return false;
        }
        self.registry.show_popup(map, id);
        if let Some(position) = self.registry.position(id) {
            let zoom = map.zoom().max(self.config.map_config.focus_zoom);
            map.ease_to(position, zoom);
        }
        if page.is_list_modal_open() {
            page.close_list_modal();
        }
        if page.is_small_viewport() {
            page.scroll_map_into_view();
        }
        true
    }

    /// Girar el mapa `delta` grados (resultado en [0, 360))
    pub fn rotate_by(&self, map: &mut M, delta: f64) {
        let bearing = (map.bearing() + delta).rem_euclid(360.0);
        map.set_bearing(bearing);
    }

    pub fn reset_north(&self, map: &mut M) {
        map.set_bearing(0.0);
    }

    /// Puntos que el encuadre tras "現在地" debe seguir incluyendo
    pub fn anchor_points(&self) -> Vec<LatLng> {
        self.store.anchor_points()
    }

    pub fn location_viewmodel(&self) -> LocationViewModel {
        LocationViewModel::new(
            self.config.geo_config.clone(),
            &self.config.map_config,
            &self.config.language,
        )
    }
}
