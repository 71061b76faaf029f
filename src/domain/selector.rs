//! Read model of a selector as returned to API callers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PluginId, SelectorId};

/// Selector record as exposed by list and detail operations.
///
/// Unlike [`crate::dto::selector::SelectorDto`] it always carries an assigned
/// identifier plus the bookkeeping timestamps maintained by the repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub id: SelectorId,
    pub plugin_id: PluginId,
    pub name: String,
    pub match_mode: i32,
    #[serde(rename = "type")]
    pub selector_type: i32,
    pub sort: i32,
    pub enabled: bool,
    pub loged: bool,
    pub continued: bool,
    /// Plugin specific handle, stored verbatim.
    pub handle: Option<String>,
    pub date_created: NaiveDateTime,
    pub date_updated: NaiveDateTime,
}
