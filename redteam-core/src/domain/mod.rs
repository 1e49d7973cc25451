//! Domain Layer - targets, scenarios and analysis records
//!
//! These types are shared by every crate in the workspace and carry no I/O.

pub mod analysis;
pub mod scenario;
pub mod target;

pub use analysis::*;
pub use scenario::*;
pub use target::*;
