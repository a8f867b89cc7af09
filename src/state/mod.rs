// ============================================================================
// STATE MODULE - Datos cargados + estado de filtro de la página
// ============================================================================

pub mod data_store;
pub mod filter_state;

pub use data_store::*;
pub use filter_state::*;
