pub mod client;
pub mod errors;
pub mod models;

pub use client::{Geocode, HttpGeocoder};
pub use errors::GeocodeError;
pub use models::GeoResult;
