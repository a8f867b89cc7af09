pub mod filter_viewmodel;
pub mod marker_registry;
pub mod selection_viewmodel;
pub mod location_viewmodel;

pub use filter_viewmodel::FilterViewModel;
pub use marker_registry::{MarkerRegistry, SyncReport};
pub use selection_viewmodel::{Selection, SelectionViewModel};
pub use location_viewmodel::{LocationViewModel, LocateOutcome};
