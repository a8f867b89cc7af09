// ============================================================================
// WEB VIEWS - ListSurface / PageChrome sobre el DOM real
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlSelectElement, ScrollIntoViewOptions};
use crate::dom::*;
use crate::utils::i18n::t;
use crate::views::{find_card_by_id, ListSurface, PageChrome, SpotCard, VenuePanel};

const ACTIVE_CLASS: &str = "active";
const MODAL_OPEN_CLASS: &str = "is-open";

fn line(tag: &str, class: &str, text: &str) -> Result<Option<Element>, JsValue> {
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(ElementBuilder::new(tag)?.class(class).text(text).build()))
}

fn card_element(card: &SpotCard) -> Result<Element, JsValue> {
    let class = if card.active { "card active" } else { "card" };
    let meta = [card.address.as_str(), card.phone.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" / ");

    Ok(ElementBuilder::new("article")?
        .class(class)
        .attr("data-id", &card.id)?
        .attr("tabindex", "0")?
        .child(ElementBuilder::new("h2")?.text(&card.title).build())?
        .child_opt(line("div", "meta", &meta)?)?
        .child_opt(line("p", "note", &card.note)?)?
        .build())
}

/// Lista `#list`
pub struct DomList {
    root: Element,
}

impl DomList {
    pub fn mount(id: &str) -> Result<Self, JsValue> {
        let root = get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Comparación exacta del `data-id`: los ids pueden contener caracteres especiales de CSS
    fn card_with_id(&self, id: &str) -> Option<Element> {
        let children = self.root.children();
        let cards = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|el| has_class(el, "card"))
            .map(|el| (el.get_attribute("data-id"), el));
        find_card_by_id(cards, id)
    }

    fn try_show_cards(&self, cards: &[SpotCard]) -> Result<(), JsValue> {
        clear_children(&self.root);
        for card in cards {
            append_child(&self.root, &card_element(card)?)?;
        }
        Ok(())
    }
}

impl ListSurface for DomList {
    fn show_placeholder(&mut self, message: &str) {
        clear_children(&self.root);
        match ElementBuilder::new("p") {
            Ok(p) => {
                if let Err(e) = append_child(&self.root, &p.class("empty").text(message).build()) {
                    log::error!("❌ [LIST] Error pintando placeholder: {:?}", e);
                }
            }
            Err(e) => log::error!("❌ [LIST] {:?}", e),
        }
    }

    fn show_cards(&mut self, cards: &[SpotCard]) {
        if let Err(e) = self.try_show_cards(cards) {
            log::error!("❌ [LIST] Error pintando cards: {:?}", e);
        }
    }

    fn set_card_active(&mut self, id: &str, active: bool) {
        let Some(card) = self.card_with_id(id) else {
            log::debug!("📋 [LIST] Sin card para {}", id);
            return;
        };
        if let Err(e) = toggle_class(&card, ACTIVE_CLASS, active) {
            log::error!("❌ [LIST] Error marcando card {}: {:?}", id, e);
        }
    }
}

/// Resto de la página: viewport, modal de lista, botón "現在地", alertas
#[derive(Clone)]
pub struct DomPage {
    mobile_query: String,
}

impl DomPage {
    pub fn new(mobile_query: &str) -> Self {
        Self {
            mobile_query: mobile_query.to_string(),
        }
    }

    fn set_modal(&self, open: bool) {
        let Some(modal) = get_element_by_id("list-modal") else {
            log::warn!("⚠️ [UI] #list-modal no existe");
            return;
        };
        if let Err(e) = Self::try_set_modal(&modal, open) {
            log::error!("❌ [UI] Error con el modal de la lista: {:?}", e);
        }
    }

    fn try_set_modal(modal: &Element, open: bool) -> Result<(), JsValue> {
        toggle_class(modal, MODAL_OPEN_CLASS, open)?;
        set_attribute(modal, "aria-hidden", if open { "false" } else { "true" })?;
        // Bloquear el scroll del fondo mientras el modal está abierto
        if let Some(body) = document().and_then(|d| d.body()) {
            set_style(&body, "overflow", if open { "hidden" } else { "" })?;
        }
        Ok(())
    }
}

impl PageChrome for DomPage {
    fn is_small_viewport(&self) -> bool {
        window()
            .and_then(|w| w.match_media(&self.mobile_query).ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false)
    }

    fn scroll_map_into_view(&self) {
        let Some(map) = get_element_by_id("map") else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        // "smooth" / "start" vía Reflect: los enums de scroll varían entre versiones de web-sys
        let set = js_sys::Reflect::set(&options, &"behavior".into(), &"smooth".into())
            .and_then(|_| js_sys::Reflect::set(&options, &"block".into(), &"start".into()));
        if let Err(e) = set {
            log::warn!("⚠️ [UI] Opciones de scroll: {:?}", e);
        }
        map.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn is_list_modal_open(&self) -> bool {
        get_element_by_id("list-modal")
            .map(|m| has_class(&m, MODAL_OPEN_CLASS))
            .unwrap_or(false)
    }

    fn open_list_modal(&self) {
        self.set_modal(true);
    }

    fn close_list_modal(&self) {
        self.set_modal(false);
    }

    fn set_locate_busy(&self, busy: bool, label: &str) {
        if let Some(button) = get_typed_by_id::<HtmlButtonElement>("locate") {
            button.set_disabled(busy);
            button.set_text_content(Some(label));
        }
    }

    fn notify(&self, message: &str) {
        if let Some(w) = window() {
            if let Err(e) = w.alert_with_message(message) {
                log::error!("❌ [UI] alert falló ({:?}): {}", e, message);
            }
        }
    }
}

/// Panel `#venue`: oculto sin venue
pub fn render_venue_panel(panel: Option<&VenuePanel>) -> Result<(), JsValue> {
    let Some(root) = get_element_by_id("venue") else {
        return Ok(());
    };
    clear_children(&root);
    let Some(panel) = panel else {
        root.set_attribute("hidden", "")?;
        return Ok(());
    };
    root.remove_attribute("hidden")?;
    append_child(&root, &ElementBuilder::new("h2")?.text(&panel.title).build())?;
    for (class, text) in [("address", &panel.address), ("phone", &panel.phone), ("note", &panel.note)] {
        if let Some(el) = line("div", class, text)? {
            append_child(&root, &el)?;
        }
    }
    Ok(())
}

/// Opciones del `<select id="category">`: "todas" + categorías en orden de aparición
pub fn populate_category_select(categories: &[String], lang: &str) -> Result<(), JsValue> {
    let Some(select) = get_typed_by_id::<HtmlSelectElement>("category") else {
        return Ok(());
    };
    let root: &Element = select.unchecked_ref();
    clear_children(root);
    append_child(root, &ElementBuilder::new("option")?.attr("value", "")?.text(&t("all_categories", lang)).build())?;
    for category in categories {
        append_child(root, &ElementBuilder::new("option")?.attr("value", category)?.text(category).build())?;
    }
    select.set_value("");
    Ok(())
}
