// ============================================================================
// DATA SERVICE - SOLO carga de los JSON estáticos (spots + venue)
// ============================================================================

use crate::error::AppError;
use crate::models::{Spot, Venue};
use crate::state::DataStore;

/// Parsear `shops.json` (array de spots)
pub fn parse_spots(resource: &str, body: &str) -> Result<Vec<Spot>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::data_load(resource, format!("Parse error: {}", e)))
}

/// Parsear `venue.json`; `null` = sin venue
pub fn parse_venue(resource: &str, body: &str) -> Result<Option<Venue>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::data_load(resource, format!("Parse error: {}", e)))
}

/// Combinar las dos respuestas en el store
pub fn build_store(spots: Vec<Spot>, venue: Option<Venue>) -> Result<DataStore, AppError> {
    DataStore::new(spots, venue)
}

/// Qué hacer con la respuesta del venue según su estado HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueResponse {
    Present,
    Absent,
    Failed,
}

impl VenueResponse {
    /// 2xx = hay cuerpo, 404 = no hay venue, cualquier otro = fallo de carga
    pub fn classify(status: u16) -> Self {
        match status {
            200..=299 => VenueResponse::Present,
            404 => VenueResponse::Absent,
            _ => VenueResponse::Failed,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::fetch_store;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use gloo_net::http::Request;

    async fn get_text(url: &str) -> Result<(u16, String), AppError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| AppError::data_load(url, format!("Network error: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::data_load(url, format!("Read error: {}", e)))?;
        Ok((status, body))
    }

    /// Las dos cargas se esperan en orden; ambas deben terminar antes del primer render
    pub async fn fetch_store(spots_url: &str, venue_url: &str) -> Result<DataStore, AppError> {
        log::info!("📥 [DATA] Cargando {} y {}", spots_url, venue_url);

        let (status, body) = get_text(spots_url).await?;
        if !(200..=299).contains(&status) {
            return Err(AppError::data_load(spots_url, format!("HTTP {}", status)));
        }
        let spots = parse_spots(spots_url, &body)?;

        let (status, body) = get_text(venue_url).await?;
        let venue = match VenueResponse::classify(status) {
            VenueResponse::Present => parse_venue(venue_url, &body)?,
            VenueResponse::Absent => {
                log::info!("ℹ️ [DATA] Sin venue ({} devolvió 404)", venue_url);
                None
            }
            VenueResponse::Failed => {
                return Err(AppError::data_load(venue_url, format!("HTTP {}", status)));
            }
        };

        let store = build_store(spots, venue)?;
        log::info!(
            "✅ [DATA] {} spots cargados (venue: {})",
            store.spots().len(),
            store.venue().is_some()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spots_array() {
        let body = r#"[
            {"id":"a","name":"Cafe A","category":"cafe","lat":35.0,"lng":135.0},
            {"id":"b","name":"Shop B","lat":35.1,"lng":135.1,"phone":"075"}
        ]"#;
        let spots = parse_spots("data/shops.json", body).unwrap();
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[1].phone.as_deref(), Some("075"));
    }

    #[test]
    fn test_parse_venue_null_is_absent() {
        assert_eq!(parse_venue("data/venue.json", "null").unwrap(), None);
    }

    #[test]
    fn test_parse_error_is_data_load() {
        let err = parse_spots("data/shops.json", "{not json").unwrap_err();
        assert!(matches!(err, AppError::DataLoad { ref resource, .. } if resource == "data/shops.json"));
    }

    #[test]
    fn test_venue_status_classification() {
        assert_eq!(VenueResponse::classify(200), VenueResponse::Present);
        assert_eq!(VenueResponse::classify(404), VenueResponse::Absent);
        assert_eq!(VenueResponse::classify(500), VenueResponse::Failed);
        assert_eq!(VenueResponse::classify(403), VenueResponse::Failed);
    }
}
