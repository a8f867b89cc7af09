use serde::{Deserialize, Serialize};
use super::geo::LatLng;

/// Id reservado para el venue dentro del registro de marcadores y de la lista.
/// Ningún spot puede usarlo (se valida al cargar los datos).
pub const VENUE_ID: &str = "__venue__";

/// Punto de interés (tienda, café, ...) tal como viene de `shops.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// El venue tiene la misma forma que un spot (en el JSON puede venir sin `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub url: Option<String>,
}

impl Spot {
    /// Crear un spot mínimo (usado por tests y datos demo)
    pub fn new(id: &str, name: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: None,
            address: None,
            phone: None,
            note: None,
            lat,
            lng,
            url: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl Venue {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Vista del venue como spot bajo el id centinela
    pub fn as_spot(&self) -> Spot {
        Spot {
            id: VENUE_ID.to_string(),
            name: self.name.clone(),
            category: self.category.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            note: self.note.clone(),
            lat: self.lat,
            lng: self.lng,
            url: self.url.clone(),
        }
    }
}
