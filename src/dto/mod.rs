//! DTOs that bridge the HTTP surface with the access layer.

pub mod envelope;
pub mod selector;
