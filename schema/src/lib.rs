// Pokedex Progress Schema - Shared record definitions
// This crate contains the plain data records that are shared between the
// rules crate and whatever persists them (the remote store, fixtures, RON
// seed files). No rules live here, only shapes.

// Re-export the main types
pub use evolution_data::*;
pub use mission_types::*;
pub use profile_types::*;
pub use shop_types::*;
pub use team_types::*;

pub mod evolution_data;
pub mod mission_types;
pub mod profile_types;
pub mod shop_types;
pub mod team_types;
