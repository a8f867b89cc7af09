// ============================================================================
// SELECTION VIEWMODEL - Un único spot activo (pin resaltado + card activa)
// ============================================================================

use crate::maps::{MapRenderer, PinColor};
use crate::views::ListSurface;
use super::marker_registry::MarkerRegistry;

/// No hay transición de vuelta a `None`: una vez elegido algo, la selección solo se mueve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(String),
}

impl Selection {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }
}

#[derive(Debug, Default)]
pub struct SelectionViewModel {
    selection: Selection,
}

impl SelectionViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    /// Mover la selección a `id`. Devuelve `false` (sin tocar nada) si el id no tiene pin.
    pub fn select<M, L>(
        &mut self,
        id: &str,
        registry: &mut MarkerRegistry<M::Pin>,
        map: &mut M,
        list: &mut L,
    ) -> bool
    where
        M: MapRenderer,
        L: ListSurface + ?Sized,
    {
        if !registry.contains(id) {
            log::debug!("🎯 Selección ignorada: id desconocido {}", id);
            return false;
        }

        if let Selection::Selected(prev) = &self.selection {
            registry.restore_base(map, prev);
            list.set_card_active(prev, false);
        }

        self.selection = Selection::Selected(id.to_string());
        registry.set_color(map, id, PinColor::HIGHLIGHT);
        list.set_card_active(id, true);
        log::info!("🎯 Spot seleccionado: {}", id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pin_spec, FakeList, FakeMap};
    use crate::views::SpotCard;

    struct Fixture {
        map: FakeMap,
        list: FakeList,
        registry: MarkerRegistry<usize>,
        vm: SelectionViewModel,
    }

    fn fixture() -> Fixture {
        let mut map = FakeMap::new();
        let mut registry = MarkerRegistry::new();
        for id in ["A", "B", "C"] {
            registry.register(&mut map, pin_spec(id, PinColor::SPOT)).unwrap();
        }
        registry.register(&mut map, pin_spec("V", PinColor::VENUE)).unwrap();
        let mut list = FakeList::default();
        let cards: Vec<SpotCard> = ["A", "B", "C"]
            .iter()
            .map(|id| SpotCard::from_spot(&crate::models::Spot::new(id, id, 0.0, 0.0), false))
            .collect();
        list.show_cards(&cards);
        Fixture { map, list, registry, vm: SelectionViewModel::new() }
    }

    fn select(f: &mut Fixture, id: &str) -> bool {
        f.vm.select(id, &mut f.registry, &mut f.map, &mut f.list)
    }

    #[test]
    fn test_second_select_restores_previous_pin() {
        let mut f = fixture();
        select(&mut f, "A");
        select(&mut f, "B");
        assert_eq!(f.map.color_of("A"), Some(PinColor::SPOT));
        assert_eq!(f.map.color_of("B"), Some(PinColor::HIGHLIGHT));
        assert_eq!(f.list.active_ids(), vec!["B".to_string()]);
        assert_eq!(f.vm.active_id(), Some("B"));
    }

    #[test]
    fn test_exactly_one_pin_highlighted() {
        let mut f = fixture();
        for id in ["A", "C", "V", "B", "B", "A"] {
            select(&mut f, id);
            let highlighted = ["A", "B", "C", "V"]
                .iter()
                .filter(|pid| f.map.color_of(pid) == Some(PinColor::HIGHLIGHT))
                .count();
            assert_eq!(highlighted, 1);
            assert!(f.list.active_ids().len() <= 1);
        }
    }

    #[test]
    fn test_venue_restores_to_its_own_base_color() {
        let mut f = fixture();
        select(&mut f, "V");
        select(&mut f, "A");
        assert_eq!(f.map.color_of("V"), Some(PinColor::VENUE));
    }

    #[test]
    fn test_reselect_same_id_is_idempotent() {
        let mut f = fixture();
        select(&mut f, "C");
        select(&mut f, "C");
        assert_eq!(f.map.color_of("C"), Some(PinColor::HIGHLIGHT));
        assert_eq!(f.list.active_ids(), vec!["C".to_string()]);
    }

    #[test]
    fn test_unknown_id_keeps_current_selection() {
        let mut f = fixture();
        select(&mut f, "A");
        assert!(!select(&mut f, "ghost"));
        assert_eq!(f.vm.active_id(), Some("A"));
        assert_eq!(f.map.color_of("A"), Some(PinColor::HIGHLIGHT));
    }

    // Comportamiento actual: no existe deselección
    #[test]
    fn test_selection_never_returns_to_none() {
        let mut f = fixture();
        assert_eq!(f.vm.selection(), &Selection::None);
        select(&mut f, "A");
        select(&mut f, "ghost");
        assert_ne!(f.vm.selection(), &Selection::None);
    }
}
