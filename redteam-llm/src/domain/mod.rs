//! Provider-agnostic request/response types and the provider trait

pub mod error;
pub mod messages;
pub mod provider;

pub use error::LlmError;
pub use messages::*;
pub use provider::*;
