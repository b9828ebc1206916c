// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geoapify_client;
pub mod location_service;
pub mod normalizer;
pub mod opening_hours;
pub mod place_service;
pub mod ranking;

pub use geoapify_client::*;
pub use location_service::*;
pub use place_service::*;
