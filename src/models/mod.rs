// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod geoapify;
pub mod query;
pub mod service_entry;

pub use geoapify::*;
pub use query::*;
pub use service_entry::*;
