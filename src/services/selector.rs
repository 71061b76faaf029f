//! Selector access layer backing the `/selector` endpoints.
//!
//! Every operation resolves to exactly one [`Envelope`]. Whatever goes wrong
//! underneath, be it a malformed request, a repository error or a panic in the
//! repository, is logged with its cause and reported to the caller only as
//! `"<operation> exception"` without data.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::de::DeserializeOwned;

use crate::domain::selector::Selector;
use crate::domain::types::{PluginId, SelectorId};
use crate::dto::envelope::Envelope;
use crate::dto::selector::{SelectorDto, SelectorListParams};
use crate::pagination::{PageParameter, Pager};
use crate::repository::errors::RepositoryError;
use crate::repository::{SelectorQuery, SelectorReader, SelectorWriter};
use crate::services::{ServiceError, ServiceResult};

pub const QUERY_SELECTORS: &str = "query selectors";
pub const DETAIL_SELECTOR: &str = "detail selector";
pub const CREATE_SELECTOR: &str = "create selector";
pub const UPDATE_SELECTOR: &str = "update selector";
pub const DELETE_SELECTORS: &str = "delete selectors";

/// Lists one page of selectors, optionally restricted to a plugin.
///
/// `query_string` is the raw `pluginId`/`currentPage`/`pageSize` query;
/// paging values are forwarded without defaulting.
pub fn query_selectors<R>(repo: &R, query_string: &str) -> Envelope<Pager<Selector>>
where
    R: SelectorReader + ?Sized,
{
    respond(QUERY_SELECTORS, || {
        let params: SelectorListParams = serde_html_form::from_str(query_string)
            .map_err(|e| ServiceError::Validation(format!("malformed query string: {e}")))?;

        let mut query =
            SelectorQuery::new(PageParameter::new(params.current_page, params.page_size));

        let plugin_id = params
            .plugin_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Some(plugin_id) = plugin_id {
            query = query.plugin_id(PluginId::new(plugin_id)?);
        }

        Ok(repo.list_selectors_by_page(&query)?)
    })
}

/// Looks a selector up by identifier. An unknown identifier is still a
/// success, just without data.
pub fn detail_selector<R>(repo: &R, id: &str) -> Envelope<Selector>
where
    R: SelectorReader + ?Sized,
{
    respond(DETAIL_SELECTOR, || {
        let id = SelectorId::new(id)?;
        let selector = repo.find_selector_by_id(&id)?;
        if selector.is_none() {
            log::debug!("Selector {id} not found");
        }
        Ok(selector)
    })
    .flatten()
}

/// Creates a selector from a JSON write model, returning the affected count.
pub fn create_selector<R>(repo: &R, body: &[u8]) -> Envelope<usize>
where
    R: SelectorWriter + ?Sized,
{
    respond(CREATE_SELECTOR, || {
        let dto: SelectorDto = parse_payload(body)?;
        Ok(repo.create_or_update_selector(&dto)?)
    })
}

/// Saves the JSON write model under the identifier taken from the path.
pub fn update_selector<R>(repo: &R, id: &str, body: &[u8]) -> Envelope<usize>
where
    R: SelectorWriter + ?Sized,
{
    respond(UPDATE_SELECTOR, || {
        let dto: SelectorDto = parse_payload(body)?;
        let dto = dto.with_id(SelectorId::new(id)?);
        Ok(repo.create_or_update_selector(&dto)?)
    })
}

/// Deletes every selector listed in the JSON array body.
pub fn delete_selectors<R>(repo: &R, body: &[u8]) -> Envelope<usize>
where
    R: SelectorWriter + ?Sized,
{
    respond(DELETE_SELECTORS, || {
        let ids: Vec<String> = parse_payload(body)?;
        Ok(repo.delete_selectors(&ids)?)
    })
}

fn respond<T, F>(label: &str, operation: F) -> Envelope<T>
where
    F: FnOnce() -> ServiceResult<T>,
{
    let result = panic::catch_unwind(AssertUnwindSafe(operation)).unwrap_or_else(|payload| {
        Err(ServiceError::Repository(RepositoryError::Unexpected(
            panic_message(payload.as_ref()),
        )))
    });

    match result {
        Ok(data) => Envelope::success(format!("{label} success"), data),
        Err(err) => {
            log::error!("{label} failed: {err}");
            Envelope::error(format!("{label} exception"))
        }
    }
}

/// Decodes a required JSON body; `null` counts as missing.
fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> ServiceResult<T> {
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(Some(payload)) => Ok(payload),
        Ok(None) => Err(ServiceError::Validation(
            "request body is required".to_string(),
        )),
        Err(err) => Err(ServiceError::Validation(format!(
            "malformed request body: {err}"
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "repository panicked".to_string()
    }
}
