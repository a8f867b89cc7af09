pub mod spot;
pub mod geo;

pub use spot::{Spot, Venue, VENUE_ID};
pub use geo::{LatLng, LatLngBounds, GeoFix};
