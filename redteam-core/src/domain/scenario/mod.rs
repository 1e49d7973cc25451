//! Attack scenarios and their simulated outcomes

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
