//! Actix-web handlers exposing the access layer over HTTP.

pub mod selector;
