// ============================================================================
// SPOT LIST VIEW - Cards de la lista (independiente del DOM)
// ============================================================================

use crate::models::Spot;
use crate::utils::i18n::t;

/// Superficie donde se pinta la lista (DOM en web, fake en tests)
pub trait ListSurface {
    /// Reemplazar el contenido por un único mensaje
    fn show_placeholder(&mut self, message: &str);

    /// Reemplazar el contenido por estas cards (cada una lleva su `data-id`)
    fn show_cards(&mut self, cards: &[SpotCard]);

    /// Marcar / desmarcar la card `id` como activa. Id sin card = no-op.
    fn set_card_active(&mut self, id: &str, active: bool);
}

/// Datos de una card ya preparados para pintar
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCard {
    pub id: String,
    pub title: String,
    pub address: String,
    pub phone: String,
    pub note: String,
    pub active: bool,
}

impl SpotCard {
    pub fn from_spot(spot: &Spot, active: bool) -> Self {
        Self {
            id: spot.id.clone(),
            title: spot.name.clone(),
            address: spot.address.clone().unwrap_or_default(),
            phone: spot.phone.clone().unwrap_or_default(),
            note: spot.note.clone().unwrap_or_default(),
            active,
        }
    }
}

/// La card cuyo `data-id` es exactamente `id`.
/// Comparación de strings, sin selectores CSS: un id puede contener `\` o comillas.
pub fn find_card_by_id<T>(cards: impl IntoIterator<Item = (Option<String>, T)>, id: &str) -> Option<T> {
    cards
        .into_iter()
        .find(|(data_id, _)| data_id.as_deref() == Some(id))
        .map(|(_, card)| card)
}

pub struct ListRenderer;

impl ListRenderer {
    /// Una card por item; lista vacía = placeholder "sin resultados"
    pub fn render<L: ListSurface + ?Sized>(surface: &mut L, items: &[Spot], active: Option<&str>, lang: &str) {
        if items.is_empty() {
            surface.show_placeholder(&t("no_results", lang));
            return;
        }
        let cards: Vec<SpotCard> = items
            .iter()
            .map(|spot| SpotCard::from_spot(spot, active == Some(spot.id.as_str())))
            .collect();
        log::debug!("📋 [LIST] Renderizando {} cards", cards.len());
        surface.show_cards(&cards);
    }

    pub fn render_load_failure<L: ListSurface + ?Sized>(surface: &mut L, lang: &str) {
        surface.show_placeholder(&t("load_failed", lang));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeList;

    #[test]
    fn test_empty_items_show_no_results_placeholder() {
        let mut list = FakeList::default();
        ListRenderer::render(&mut list, &[], None, "JA");
        assert_eq!(list.placeholder.as_deref(), Some("該当するスポットがありません。"));
        assert!(list.cards.is_empty());
    }

    #[test]
    fn test_two_items_render_two_cards_with_ids() {
        let mut list = FakeList::default();
        let items = vec![
            Spot::new("s1", "One", 0.0, 0.0).with_address("Addr 1"),
            Spot::new("s2", "Two", 1.0, 1.0),
        ];
        ListRenderer::render(&mut list, &items, None, "JA");
        let ids: Vec<&str> = list.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
        assert!(list.placeholder.is_none());
        assert_eq!(list.cards[0].address, "Addr 1");
        assert_eq!(list.cards[1].address, "");
    }

    #[test]
    fn test_active_card_survives_rerender() {
        let mut list = FakeList::default();
        let items = vec![Spot::new("s1", "One", 0.0, 0.0), Spot::new("s2", "Two", 1.0, 1.0)];
        ListRenderer::render(&mut list, &items, Some("s2"), "EN");
        assert_eq!(list.active_ids(), vec!["s2".to_string()]);
    }

    #[test]
    fn test_find_card_by_id_is_exact_for_css_special_ids() {
        let cards = || {
            vec![
                (Some("a\\b".to_string()), 0),
                (Some("q\"x".to_string()), 1),
                (None, 2),
                (Some("ab".to_string()), 3),
            ]
        };
        assert_eq!(find_card_by_id(cards(), "a\\b"), Some(0));
        assert_eq!(find_card_by_id(cards(), "q\"x"), Some(1));
        assert_eq!(find_card_by_id(cards(), "ab"), Some(3));
        assert_eq!(find_card_by_id(cards(), "a"), None);
    }

    #[test]
    fn test_load_failure_placeholder() {
        let mut list = FakeList::default();
        ListRenderer::render_load_failure(&mut list, "EN");
        assert_eq!(list.placeholder.as_deref(), Some("Failed to load data."));
    }
}
