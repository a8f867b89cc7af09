// ============================================================================
// EVENT HANDLING - Helpers de listeners
// ============================================================================
// Todos los listeners de la página se registran UNA VEZ en el arranque sobre
// elementos que viven toda la sesión, así que closure.forget() no acumula.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent};

fn listen<E, F>(target: &EventTarget, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| handler(e.unchecked_into::<E>())) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// `input` en campos de texto
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "input", handler)
}

/// `change` en selects
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Teclas a nivel de document (Escape del modal)
pub fn on_document_keydown<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let doc = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    listen(&doc, "keydown", handler)
}

/// Delegación: el `data-id` de la card más cercana al target del click
pub fn closest_card_id(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(".card").ok()??;
    card.get_attribute("data-id")
}

/// El target del evento es exactamente `element` (clicks en el backdrop)
pub fn targets_element(event: &Event, element: &Element) -> bool {
    let node: &web_sys::Node = element;
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .map(|t| t.is_same_node(Some(node)))
        .unwrap_or(false)
}
