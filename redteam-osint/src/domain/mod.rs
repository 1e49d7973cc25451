//! Target collection domain: errors, heuristics and search types

pub mod errors;
pub mod heuristics;
pub mod search;

pub use errors::{CacheError, FetchError};
pub use search::{SearchHit, SearchScope, matches_query};
