// ============================================================================
// ERRORES - Taxonomía de errores de la app
// ============================================================================
// Ningún error es fatal: la capa web los registra y la página sigue interactiva
// ============================================================================

use thiserror::Error;
use crate::maps::MapError;

/// Tipo de fallo de geolocalización (códigos de `GeolocationPositionError`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoErrorKind {
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timeout")]
    Timeout,
    #[error("unknown error")]
    Unknown,
}

impl GeoErrorKind {
    /// 1 = PERMISSION_DENIED, 2 = POSITION_UNAVAILABLE, 3 = TIMEOUT
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoErrorKind::PermissionDenied,
            2 => GeoErrorKind::PositionUnavailable,
            3 => GeoErrorKind::Timeout,
            _ => GeoErrorKind::Unknown,
        }
    }

    /// Clave i18n del mensaje para el usuario
    pub fn message_key(&self) -> &'static str {
        match self {
            GeoErrorKind::PermissionDenied => "geo_permission_denied",
            GeoErrorKind::PositionUnavailable => "geo_position_unavailable",
            GeoErrorKind::Timeout => "geo_timeout",
            GeoErrorKind::Unknown => "geo_unknown",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load {resource}: {reason}")]
    DataLoad { resource: String, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Map(#[from] MapError),
}

impl AppError {
    pub fn data_load(resource: &str, reason: impl Into<String>) -> Self {
        AppError::DataLoad {
            resource: resource.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_error_codes() {
        assert_eq!(GeoErrorKind::from_code(1), GeoErrorKind::PermissionDenied);
        assert_eq!(GeoErrorKind::from_code(2), GeoErrorKind::PositionUnavailable);
        assert_eq!(GeoErrorKind::from_code(3), GeoErrorKind::Timeout);
        assert_eq!(GeoErrorKind::from_code(0), GeoErrorKind::Unknown);
        assert_eq!(GeoErrorKind::from_code(42), GeoErrorKind::Unknown);
    }

    #[test]
    fn test_geo_error_display() {
        assert_eq!(GeoErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(GeoErrorKind::PermissionDenied.to_string(), "permission denied");
    }

    #[test]
    fn test_data_load_message() {
        let err = AppError::data_load("data/shops.json", "HTTP 500");
        assert_eq!(err.to_string(), "failed to load data/shops.json: HTTP 500");
    }
}
