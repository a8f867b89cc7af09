pub mod data_service;
pub mod geolocation_service;

pub use data_service::*;
pub use geolocation_service::*;
