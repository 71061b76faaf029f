//! Domain entities exposed by the selector access layer.

pub mod selector;
pub mod types;
