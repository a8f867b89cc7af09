// ============================================================================
// DATA STORE - Spots + venue cargados al arrancar (inmutables después)
// ============================================================================

use std::collections::HashSet;
use crate::error::AppError;
use crate::models::{LatLng, Spot, Venue, VENUE_ID};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    spots: Vec<Spot>,
    venue: Option<Venue>,
}

impl DataStore {
    /// Valida ids únicos y que ningún spot use el id centinela del venue
    pub fn new(spots: Vec<Spot>, venue: Option<Venue>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(spots.len());
        for spot in &spots {
            if spot.id == VENUE_ID {
                return Err(AppError::InvalidData(format!(
                    "spot id '{}' is reserved for the venue",
                    VENUE_ID
                )));
            }
            if !seen.insert(spot.id.as_str()) {
                return Err(AppError::InvalidData(format!("duplicate spot id '{}'", spot.id)));
            }
        }
        Ok(Self { spots, venue })
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn venue(&self) -> Option<&Venue> {
        self.venue.as_ref()
    }

    /// Items de la lista: los spots, con el venue primero si va en la lista
    pub fn list_items(&self, venue_in_list: bool) -> Vec<Spot> {
        let mut items = Vec::with_capacity(self.spots.len() + 1);
        if venue_in_list {
            if let Some(venue) = &self.venue {
                items.push(venue.as_spot());
            }
        }
        items.extend(self.spots.iter().cloned());
        items
    }

    /// Puntos que el encuadre del mapa debe incluir: todos los spots y el venue
    pub fn anchor_points(&self) -> Vec<LatLng> {
        let mut points: Vec<LatLng> = self.spots.iter().map(Spot::position).collect();
        if let Some(venue) = &self.venue {
            points.push(venue.position());
        }
        points
    }
}
