pub mod spot_list;
pub mod popup;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use spot_list::{find_card_by_id, ListRenderer, ListSurface, SpotCard};
pub use popup::{build_spot_popup, build_venue_popup, escape_html, VenuePanel};
pub use page::{BusyGuard, PageChrome};
