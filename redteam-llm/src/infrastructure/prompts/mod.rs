//! Prompt templates

pub mod templates;

pub use templates::*;
