//! Attackable entities: vessels and infrastructure facilities

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
