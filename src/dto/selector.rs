//! Write model and query parameters of the `/selector` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::types::SelectorId;

/// Caller supplied payload for creating or updating a selector.
///
/// A blank or absent `id` asks the repository to create a new record; any
/// other value addresses an existing one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorDto {
    #[serde(default)]
    pub id: Option<String>,
    pub plugin_id: String,
    pub name: String,
    #[serde(default)]
    pub match_mode: i32,
    #[serde(rename = "type", default)]
    pub selector_type: i32,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub loged: bool,
    #[serde(default)]
    pub continued: bool,
    #[serde(default)]
    pub handle: Option<String>,
}

impl SelectorDto {
    /// Returns a copy of the payload addressed to `id`, replacing whatever
    /// identifier the caller supplied.
    #[must_use]
    pub fn with_id(self, id: SelectorId) -> Self {
        Self {
            id: Some(id.into_inner()),
            ..self
        }
    }

    /// Identifier of the addressed record, if the payload carries a usable one.
    pub fn selector_id(&self) -> Option<SelectorId> {
        self.id
            .as_deref()
            .and_then(|id| SelectorId::new(id).ok())
    }
}

/// Query parameters accepted by `GET /selector`.
///
/// Values are passed through untouched; defaulting and bounds belong to the
/// repository.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorListParams {
    /// Optional owning plugin restricting the listing.
    pub plugin_id: Option<String>,
    pub current_page: Option<u32>,
    pub page_size: Option<u32>,
}
