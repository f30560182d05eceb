/// Shared kernel - Common utilities and types
///
/// This module contains types and utilities shared across all layers.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
