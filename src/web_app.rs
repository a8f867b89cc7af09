// ============================================================================
// WEB APP - Arranque en el navegador: instancia global + listeners
// ============================================================================
// Todo el estado vive en `APP` (thread_local). Los listeners se registran una
// sola vez en `start()` y entran al estado con `with_app`. Las tareas async
// (carga de datos, ubicación) nunca mantienen un borrow a través de un await.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, KeyboardEvent, MouseEvent};
use crate::app::SpotFinder;
use crate::config::{AppConfig, CONFIG};
use crate::dom::*;
use crate::error::AppError;
use crate::maps::web::LeafletMap;
use crate::services::{fetch_store, Geolocator, WebGeolocator};
use crate::utils::i18n::t;
use crate::views::web::{populate_category_select, render_venue_panel, DomList, DomPage};
use crate::views::{PageChrome, VenuePanel};

struct App {
    finder: SpotFinder<LeafletMap>,
    map: LeafletMap,
    list: DomList,
    page: DomPage,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Ejecutar `f` sobre la app si está inicializada y libre
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            log::warn!("⚠️ [APP] Estado ocupado, evento ignorado");
            None
        }
    })
}

pub fn start() -> Result<(), JsValue> {
    let config: AppConfig = CONFIG.clone();
    log::info!("🚀 [APP] Iniciando (idioma: {})", config.language);

    let on_pin_click: Rc<dyn Fn(String)> = Rc::new(|id: String| {
        with_app(|app| {
            let App { finder, map, list, .. } = app;
            finder.select(&id, map, list);
        });
    });
    let map = LeafletMap::new("map", &config.map_config, on_pin_click).map_err(AppError::from)?;
    let list = DomList::mount("list")?;
    let page = DomPage::new(&config.ui_config.mobile_breakpoint);
    page.set_locate_busy(false, &t("locate", &config.language));

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            finder: SpotFinder::new(config.clone()),
            map,
            list,
            page,
        });
    });

    bind_controls(&config)?;
    spawn_local(load_data(config));
    Ok(())
}

fn bind_click<F>(id: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    match get_element_by_id(id) {
        Some(element) => on_click(&element, move |_e: MouseEvent| handler()),
        None => {
            log::warn!("⚠️ [UI] #{} no existe, control omitido", id);
            Ok(())
        }
    }
}

fn bind_controls(config: &AppConfig) -> Result<(), JsValue> {
    // Búsqueda
    if let Some(input) = get_typed_by_id::<HtmlInputElement>("search") {
        let source = input.clone();
        on_input(&input, move |_e: Event| {
            let query = source.value();
            with_app(|app| {
                let App { finder, map, list, .. } = app;
                finder.set_query(&query, map, list);
            });
        })?;
    }

    // Categoría
    if let Some(select) = get_typed_by_id::<HtmlSelectElement>("category") {
        let source = select.clone();
        on_change(&select, move |_e: Event| {
            let value = source.value();
            let category = (!value.is_empty()).then_some(value.as_str());
            with_app(|app| {
                let App { finder, map, list, .. } = app;
                finder.set_category(category, map, list);
            });
        })?;
    }

    // Lista: un único listener delegado por data-id
    let list_root = with_app(|app| app.list.root().clone());
    if let Some(root) = list_root {
        on_click(&root, move |e: MouseEvent| {
            if let Some(id) = closest_card_id(&e) {
                with_app(|app| {
                    let App { finder, map, list, page } = app;
                    finder.focus_spot(&id, map, list, page);
                });
            }
        })?;
    }

    bind_click("locate", run_locate)?;

    // Modal de la lista
    bind_click("list-open", || {
        with_app(|app| app.page.open_list_modal());
    })?;
    bind_click("list-close", || {
        with_app(|app| app.page.close_list_modal());
    })?;
    if let Some(backdrop) = get_element_by_id("list-modal").and_then(|m| query_in(&m, ".modal-backdrop")) {
        let target = backdrop.clone();
        on_click(&backdrop, move |e: MouseEvent| {
            if targets_element(&e, &target) {
                with_app(|app| app.page.close_list_modal());
            }
        })?;
    }
    on_document_keydown(|e: KeyboardEvent| {
        if e.key() == "Escape" {
            with_app(|app| {
                if app.page.is_list_modal_open() {
                    app.page.close_list_modal();
                }
            });
        }
    })?;

    // Rotación
    let step = config.map_config.rotate_step_deg;
    bind_click("rotate-left", move || {
        with_app(|app| app.finder.rotate_by(&mut app.map, -step));
    })?;
    bind_click("rotate-right", move || {
        with_app(|app| app.finder.rotate_by(&mut app.map, step));
    })?;
    bind_click("rotate-reset", || {
        with_app(|app| app.finder.reset_north(&mut app.map));
    })?;

    log::info!("✅ [UI] Controles enlazados");
    Ok(())
}

/// "現在地": la tarea trabaja con clones del mapa y de la página
fn run_locate() {
    let Some((vm, mut map, page, anchors)) = with_app(|app| {
        (
            app.finder.location_viewmodel(),
            app.map.clone(),
            app.page.clone(),
            app.finder.anchor_points(),
        )
    }) else {
        return;
    };
    spawn_local(async move {
        let outcome = vm.locate(&WebGeolocator, &mut map, &page, &anchors).await;
        log::debug!("📍 [GEO] Resultado: {:?}", outcome);
    });
}

async fn load_data(config: AppConfig) {
    let lang = config.language.clone();
    match fetch_store(&config.spots_url, &config.venue_url).await {
        Ok(store) => {
            let panel = match store.venue() {
                Some(venue) if !config.ui_config.venue_in_list => Some(VenuePanel::from_venue(venue, &lang)),
                _ => None,
            };
            let categories = with_app(|app| {
                let App { finder, map, list, .. } = app;
                finder.load(store, map, list);
                finder.category_options()
            });
            if let Err(e) = render_venue_panel(panel.as_ref()) {
                log::error!("❌ [UI] Panel del venue: {:?}", e);
            }
            if let Err(e) = populate_category_select(&categories.unwrap_or_default(), &lang) {
                log::error!("❌ [UI] Select de categorías: {:?}", e);
            }

            let geo = WebGeolocator;
            if config.geo_config.auto_locate && geo.is_supported() && geo.is_secure_context() {
                run_locate();
            }
        }
        Err(e) => {
            log::error!("❌ [DATA] {}", e);
            with_app(|app| app.finder.show_load_failure(&mut app.list));
            if let Err(e) = render_venue_panel(None) {
                log::error!("❌ [UI] Panel del venue: {:?}", e);
            }
        }
    }
}
