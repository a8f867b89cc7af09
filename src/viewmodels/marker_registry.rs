// ============================================================================
// MARKER REGISTRY - Un pin por id (spots + venue), creado una sola vez
// ============================================================================
// Los pines nunca se destruyen: solo se muestran/ocultan o cambian de color.
// La pertenencia al mapa se consulta a la librería (has_pin).
// ============================================================================

use std::collections::{HashMap, HashSet};
use crate::maps::{MapError, MapRenderer, PinColor, PinSpec};
use crate::models::LatLng;

struct MarkerEntry<P> {
    pin: P,
    position: LatLng,
    base_color: PinColor,
    current_color: PinColor,
}

/// Resultado de un `sync`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub struct MarkerRegistry<P> {
    // Orden de registro, para que sync sea determinista
    order: Vec<String>,
    entries: HashMap<String, MarkerEntry<P>>,
}

impl<P: Clone> MarkerRegistry<P> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Crear el pin de `spec.id` (sin agregarlo al mapa). Un id ya registrado se ignora.
    pub fn register<M>(&mut self, map: &mut M, spec: PinSpec) -> Result<(), MapError>
    where
        M: MapRenderer<Pin = P>,
    {
        if self.entries.contains_key(&spec.id) {
            log::debug!("📍 [MAP] Pin {} ya registrado, ignorando", spec.id);
            return Ok(());
        }
        let pin = map.create_pin(&spec)?;
        self.order.push(spec.id.clone());
        self.entries.insert(
            spec.id,
            MarkerEntry {
                pin,
                position: spec.position,
                base_color: spec.color,
                current_color: spec.color,
            },
        );
        Ok(())
    }

    /// Dejar en el mapa exactamente los pines de `visible`
    pub fn sync<M>(&self, map: &mut M, visible: &HashSet<String>) -> SyncReport
    where
        M: MapRenderer<Pin = P>,
    {
        let mut report = SyncReport::default();
        for id in &self.order {
            let Some(entry) = self.entries.get(id) else { continue };
            let on_map = map.has_pin(&entry.pin);
            let wanted = visible.contains(id);
            if wanted && !on_map {
                map.add_pin(&entry.pin);
                report.added.push(id.clone());
            } else if !wanted && on_map {
                map.remove_pin(&entry.pin);
                report.removed.push(id.clone());
            }
        }
        if !report.is_noop() {
            log::info!(
                "🗺️ [MAP] Sync: +{} -{} ({} visibles)",
                report.added.len(),
                report.removed.len(),
                visible.len()
            );
        }
        report
    }

    /// Cambiar el color del pin en el mismo objeto. Id desconocido = no-op.
    pub fn set_color<M>(&mut self, map: &mut M, id: &str, color: PinColor)
    where
        M: MapRenderer<Pin = P>,
    {
        match self.entries.get_mut(id) {
            Some(entry) => {
                map.set_pin_color(&entry.pin, color);
                entry.current_color = color;
            }
            None => log::debug!("📍 [MAP] set_color: id desconocido {}", id),
        }
    }

    /// Volver al color base registrado
    pub fn restore_base<M>(&mut self, map: &mut M, id: &str)
    where
        M: MapRenderer<Pin = P>,
    {
        if let Some(base) = self.base_color(id) {
            self.set_color(map, id, base);
        }
    }

    pub fn show_popup<M>(&self, map: &mut M, id: &str)
    where
        M: MapRenderer<Pin = P>,
    {
        if let Some(entry) = self.entries.get(id) {
            map.show_popup(&entry.pin);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn base_color(&self, id: &str) -> Option<PinColor> {
        self.entries.get(id).map(|e| e.base_color)
    }

    pub fn current_color(&self, id: &str) -> Option<PinColor> {
        self.entries.get(id).map(|e| e.current_color)
    }

    pub fn position(&self, id: &str) -> Option<LatLng> {
        self.entries.get(id).map(|e| e.position)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<P: Clone> Default for MarkerRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
