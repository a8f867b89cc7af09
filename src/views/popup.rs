// ============================================================================
// POPUP + VENUE PANEL - HTML de los popups de los pines y panel del venue
// ============================================================================

use crate::models::{Spot, Venue};
use crate::utils::i18n::t;

/// Escapar texto para insertarlo en HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn icon_link(href: &str, label: &str, icon: &str, external: bool) -> String {
    let target = if external { r#" target="_blank" rel="noopener""# } else { "" };
    format!(
        r#"<a href="{}"{} class="icon-btn" aria-label="{}"><span class="icon">{}</span></a>"#,
        escape_html(href),
        target,
        escape_html(label),
        icon
    )
}

/// Acciones del popup: teléfono (si hay), Google Maps, búsqueda en Google
fn actions_html(name: &str, lat: f64, lng: f64, phone: Option<&str>, lang: &str) -> String {
    let mut actions = String::new();
    if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
        actions.push_str(&icon_link(&format!("tel:{}", phone.trim()), &t("call", lang), "📞", false));
    }
    actions.push_str(&icon_link(
        &format!("https://www.google.com/maps/search/?api=1&query={},{}", lat, lng),
        &t("open_google_maps", lang),
        "🗺️",
        true,
    ));
    actions.push_str(&icon_link(
        &format!("https://www.google.com/search?q={}", urlencoding::encode(name)),
        &t("search_google", lang),
        "🔎",
        true,
    ));
    format!(r#"<div class="actions">{}</div>"#, actions)
}

fn popup_html(name: &str, address: Option<&str>, note: Option<&str>, actions: String) -> String {
    format!(
        r#"<strong>{}</strong><br /><div class="popup-line">{}</div><div class="popup-note">{}</div>{}"#,
        escape_html(name),
        escape_html(address.unwrap_or("")),
        escape_html(note.unwrap_or("")),
        actions
    )
}

pub fn build_spot_popup(spot: &Spot, lang: &str) -> String {
    let actions = actions_html(&spot.name, spot.lat, spot.lng, spot.phone.as_deref(), lang);
    popup_html(&spot.name, spot.address.as_deref(), spot.note.as_deref(), actions)
}

pub fn build_venue_popup(venue: &Venue, lang: &str) -> String {
    let actions = actions_html(&venue.name, venue.lat, venue.lng, venue.phone.as_deref(), lang);
    popup_html(&venue.name, venue.address.as_deref(), venue.note.as_deref(), actions)
}

/// Contenido del panel del venue (título + líneas)
#[derive(Debug, Clone, PartialEq)]
pub struct VenuePanel {
    pub title: String,
    pub address: String,
    pub phone: String,
    pub note: String,
}

impl VenuePanel {
    pub fn from_venue(venue: &Venue, lang: &str) -> Self {
        Self {
            title: format!("{}{}", t("venue_prefix", lang), venue.name),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            note: venue.note.clone().unwrap_or_default(),
        }
    }
}
