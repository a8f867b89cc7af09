use thiserror::Error;
use crate::models::{GeoFix, LatLng, LatLngBounds};

/// Trait común para renderizadores de mapas (Leaflet en web, fake en tests)
///
/// El core solo emite comandos de alto nivel; la pertenencia de un pin al mapa
/// se consulta siempre a la librería (`has_pin`), nunca a un registro propio.
pub trait MapRenderer {
    /// Handle opaco de un pin de la librería
    type Pin: Clone;

    /// Crear el pin (con su popup) sin agregarlo al mapa
    fn create_pin(&mut self, spec: &PinSpec) -> Result<Self::Pin, MapError>;

    /// Agregar el pin al mapa
    fn add_pin(&mut self, pin: &Self::Pin);

    /// Quitar el pin del mapa (el handle sigue siendo válido)
    fn remove_pin(&mut self, pin: &Self::Pin);

    /// ¿Está el pin actualmente en el mapa?
    fn has_pin(&self, pin: &Self::Pin) -> bool;

    /// Cambiar el icono en el mismo objeto (no recrea el pin ni sus listeners)
    fn set_pin_color(&mut self, pin: &Self::Pin, color: PinColor);

    /// Abrir el popup del pin
    fn show_popup(&mut self, pin: &Self::Pin);

    fn zoom(&self) -> f64;

    /// Centrar con animación en `center` al zoom dado
    fn ease_to(&mut self, center: LatLng, zoom: f64);

    /// Encuadrar los bounds (el padding ya viene aplicado)
    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    fn bearing(&self) -> f64;

    fn set_bearing(&mut self, degrees: f64);

    /// Colocar el marcador del usuario (con círculo de precisión)
    fn place_user_marker(&mut self, fix: &GeoFix, label: &str) -> Result<(), MapError>;

    /// Quitar el marcador del usuario si existe
    fn remove_user_marker(&mut self);
}

/// Datos para crear un pin
#[derive(Debug, Clone, PartialEq)]
pub struct PinSpec {
    pub id: String,
    pub position: LatLng,
    pub popup_html: String,
    pub color: PinColor,
}

/// Colores de pin (iconos de leaflet-color-markers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinColor {
    Blue,
    Orange,
    Red,
    Violet,
}

impl PinColor {
    /// Color base de un spot
    pub const SPOT: PinColor = PinColor::Blue;
    /// Color base del venue
    pub const VENUE: PinColor = PinColor::Orange;
    /// Color del pin seleccionado
    pub const HIGHLIGHT: PinColor = PinColor::Red;

    pub fn token(&self) -> &'static str {
        match self {
            PinColor::Blue => "blue",
            PinColor::Orange => "orange",
            PinColor::Red => "red",
            PinColor::Violet => "violet",
        }
    }

    pub fn icon_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-{}.png",
            self.token()
        )
    }

    pub fn icon_retina_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-{}.png",
            self.token()
        )
    }
}

/// Error del mapa
#[derive(Debug, Clone, Error)]
pub enum MapError {
    #[error("Invalid coordinates")]
    InvalidCoordinates,
    #[error("Map library error: {0}")]
    Library(String),
}

/// Validar coordenadas antes de pasarlas a la librería
pub fn check_position(position: LatLng) -> Result<LatLng, MapError> {
    let valid = position.lat.is_finite()
        && position.lng.is_finite()
        && (-90.0..=90.0).contains(&position.lat)
        && (-180.0..=180.0).contains(&position.lng);
    if valid {
        Ok(position)
    } else {
        Err(MapError::InvalidCoordinates)
    }
}
