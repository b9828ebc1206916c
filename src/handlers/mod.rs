// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod cors;
pub mod health;
pub mod location;
pub mod nearby;

pub use cors::cors;
pub use health::config as health_config;
pub use location::config as location_config;
pub use nearby::config as nearby_config;
