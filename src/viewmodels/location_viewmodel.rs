// ============================================================================
// LOCATION VIEWMODEL - Botón "現在地": una petición de ubicación por click
// ============================================================================

use crate::config::{GeoConfig, MapConfig};
use crate::error::GeoErrorKind;
use crate::maps::{check_position, MapError, MapRenderer};
use crate::models::{GeoFix, LatLng, LatLngBounds};
use crate::services::{request_position_with_fallback, Geolocator};
use crate::utils::i18n::t;
use crate::views::{BusyGuard, PageChrome};

/// Resultado de un `locate`
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// Marcador del usuario colocado y mapa re-encuadrado
    Located(GeoFix),
    /// La API no existe: no se pidió nada
    Unsupported,
    /// Página no segura: no se pidió nada
    Insecure,
    /// Fallaron los dos intentos, o la posición no se puede mostrar
    Failed(GeoErrorKind),
}

pub struct LocationViewModel {
    geo_config: GeoConfig,
    fit_padding: f64,
    lang: String,
}

impl LocationViewModel {
    pub fn new(geo_config: GeoConfig, map_config: &MapConfig, lang: &str) -> Self {
        Self {
            geo_config,
            fit_padding: map_config.fit_padding,
            lang: lang.to_string(),
        }
    }

    /// Pedir la ubicación una vez (con un reintento relajado) y mostrarla.
    ///
    /// `anchors` son los puntos que el encuadre debe seguir incluyendo (spots + venue).
    pub async fn locate<G, M, P>(&self, geo: &G, map: &mut M, page: &P, anchors: &[LatLng]) -> LocateOutcome
    where
        G: Geolocator + ?Sized,
        M: MapRenderer,
        P: PageChrome + ?Sized,
    {
        if !geo.is_supported() {
            page.notify(&t("geo_unsupported", &self.lang));
            return LocateOutcome::Unsupported;
        }
        if !geo.is_secure_context() {
            page.notify(&t("geo_insecure", &self.lang));
            return LocateOutcome::Insecure;
        }

        let _busy = BusyGuard::engage(page, &t("locating", &self.lang), &t("locate_refresh", &self.lang));
        log::info!("📍 [GEO] Pidiendo ubicación del dispositivo...");

        match request_position_with_fallback(geo, &self.geo_config).await {
            Ok(fix) => {
                if let Err(e) = self.show_user_location(map, &fix, anchors) {
                    log::error!("❌ [GEO] No se pudo mostrar la ubicación: {}", e);
                    page.notify(&t(GeoErrorKind::Unknown.message_key(), &self.lang));
                    return LocateOutcome::Failed(GeoErrorKind::Unknown);
                }
                log::info!(
                    "✅ [GEO] Ubicación: ({}, {}) ±{}m",
                    fix.position.lat,
                    fix.position.lng,
                    fix.accuracy_m
                );
                LocateOutcome::Located(fix)
            }
            Err(kind) => {
                log::warn!("⚠️ [GEO] Ubicación no disponible: {}", kind);
                page.notify(&t(kind.message_key(), &self.lang));
                LocateOutcome::Failed(kind)
            }
        }
    }

    /// El marcador anterior solo se quita si la nueva posición es válida
    fn show_user_location<M: MapRenderer>(&self, map: &mut M, fix: &GeoFix, anchors: &[LatLng]) -> Result<(), MapError> {
        check_position(fix.position)?;
        map.remove_user_marker();
        map.place_user_marker(fix, &t("current_location", &self.lang))?;
        let mut points = anchors.to_vec();
        points.push(fix.position);
        if let Some(bounds) = LatLngBounds::from_points(&points) {
            map.fit_bounds(&bounds.pad(self.fit_padding));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeMap, FakePage, ScriptedGeolocator};
    use futures::executor::block_on;

    fn vm() -> LocationViewModel {
        LocationViewModel::new(GeoConfig::default(), &MapConfig::default(), "JA")
    }

    fn anchors() -> Vec<LatLng> {
        vec![LatLng::new(35.0, 135.0), LatLng::new(35.1, 135.1)]
    }

    #[test]
    fn test_retry_success_places_one_marker_and_releases_button() {
        let geo = ScriptedGeolocator::new(vec![
            Err(GeoErrorKind::Timeout),
            Ok(ScriptedGeolocator::fix(35.5, 135.5)),
        ]);
        let mut map = FakeMap::new();
        let page = FakePage::default();

        let outcome = block_on(vm().locate(&geo, &mut map, &page, &anchors()));

        assert!(matches!(outcome, LocateOutcome::Located(_)));
        assert_eq!(map.user_markers, 1);
        assert!(!page.locate_busy.get());
        assert_eq!(page.busy_transitions(), vec![true, false]);
        assert!(page.notifications.borrow().is_empty());

        // Encuadre: anchors + usuario, con padding
        let fitted = map.fitted.last().copied().unwrap();
        assert!(fitted.contains(LatLng::new(35.5, 135.5)));
        assert!(fitted.north > 35.5);
        assert!(fitted.south < 35.0);
    }

    #[test]
    fn test_double_failure_notifies_classified_message_and_places_nothing() {
        let geo = ScriptedGeolocator::new(vec![
            Err(GeoErrorKind::Timeout),
            Err(GeoErrorKind::PermissionDenied),
        ]);
        let mut map = FakeMap::new();
        let page = FakePage::default();

        let outcome = block_on(vm().locate(&geo, &mut map, &page, &anchors()));

        assert_eq!(outcome, LocateOutcome::Failed(GeoErrorKind::PermissionDenied));
        assert_eq!(map.user_markers, 0);
        assert!(map.fitted.is_empty());
        assert!(!page.locate_busy.get());
        assert_eq!(
            page.notifications.borrow().as_slice(),
            &[t("geo_permission_denied", "JA")]
        );
    }

    #[test]
    fn test_each_error_kind_has_its_own_message() {
        for kind in [
            GeoErrorKind::PermissionDenied,
            GeoErrorKind::PositionUnavailable,
            GeoErrorKind::Timeout,
            GeoErrorKind::Unknown,
        ] {
            let geo = ScriptedGeolocator::new(vec![Err(kind), Err(kind)]);
            let page = FakePage::default();
            block_on(vm().locate(&geo, &mut FakeMap::new(), &page, &[]));
            assert_eq!(page.notifications.borrow().as_slice(), &[t(kind.message_key(), "JA")]);
        }
    }

    #[test]
    fn test_second_locate_replaces_user_marker() {
        let geo = ScriptedGeolocator::new(vec![
            Ok(ScriptedGeolocator::fix(35.5, 135.5)),
            Ok(ScriptedGeolocator::fix(35.6, 135.6)),
        ]);
        let mut map = FakeMap::new();
        let page = FakePage::default();
        let vm = vm();
        block_on(vm.locate(&geo, &mut map, &page, &anchors()));
        block_on(vm.locate(&geo, &mut map, &page, &anchors()));
        assert_eq!(map.user_markers, 1);
        assert_eq!(map.user_markers_placed, 2);
    }

    #[test]
    fn test_unusable_fix_keeps_previous_marker_and_notifies() {
        let geo = ScriptedGeolocator::new(vec![
            Ok(ScriptedGeolocator::fix(35.5, 135.5)),
            Ok(ScriptedGeolocator::fix(f64::NAN, 135.5)),
        ]);
        let mut map = FakeMap::new();
        let page = FakePage::default();
        let vm = vm();
        block_on(vm.locate(&geo, &mut map, &page, &anchors()));
        let fits_before = map.fitted.len();

        let outcome = block_on(vm.locate(&geo, &mut map, &page, &anchors()));

        assert_eq!(outcome, LocateOutcome::Failed(GeoErrorKind::Unknown));
        assert_eq!(map.user_markers, 1);
        assert_eq!(map.user_markers_placed, 1);
        assert_eq!(map.fitted.len(), fits_before);
        assert!(!page.locate_busy.get());
        assert_eq!(page.notifications.borrow().as_slice(), &[t("geo_unknown", "JA")]);
    }

    #[test]
    fn test_insecure_context_never_touches_geolocation() {
        let geo = ScriptedGeolocator::new(vec![Ok(ScriptedGeolocator::fix(1.0, 1.0))]).insecure();
        let mut map = FakeMap::new();
        let page = FakePage::default();

        let outcome = block_on(vm().locate(&geo, &mut map, &page, &anchors()));

        assert_eq!(outcome, LocateOutcome::Insecure);
        assert!(geo.requests().is_empty());
        assert!(page.busy_transitions().is_empty());
        assert_eq!(page.notifications.borrow().as_slice(), &[t("geo_insecure", "JA")]);
    }

    #[test]
    fn test_unsupported_never_touches_geolocation() {
        let geo = ScriptedGeolocator::new(vec![]).unsupported();
        let page = FakePage::default();
        let outcome = block_on(vm().locate(&geo, &mut FakeMap::new(), &page, &anchors()));
        assert_eq!(outcome, LocateOutcome::Unsupported);
        assert!(geo.requests().is_empty());
    }
}
