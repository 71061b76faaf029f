//! Storage-facing capabilities consumed by the selector access layer.
//!
//! [`SelectorReader`] and [`SelectorWriter`] are the whole contract the
//! services rely on; [`DieselRepository`] is the SQLite-backed implementation
//! shipped with the server.

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        selector::Selector,
        types::{PluginId, SelectorId},
    },
    dto::selector::SelectorDto,
    pagination::{PageParameter, Pager},
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod selector;

/// Paged listing request, optionally restricted to one owning plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorQuery {
    pub plugin_id: Option<PluginId>,
    pub page: PageParameter,
}

impl SelectorQuery {
    pub fn new(page: PageParameter) -> Self {
        Self {
            plugin_id: None,
            page,
        }
    }

    pub fn plugin_id(mut self, plugin_id: PluginId) -> Self {
        self.plugin_id = Some(plugin_id);
        self
    }
}

pub trait SelectorReader {
    /// Returns one page of selectors along with the total matching count.
    fn list_selectors_by_page(&self, query: &SelectorQuery) -> RepositoryResult<Pager<Selector>>;
    fn find_selector_by_id(&self, id: &SelectorId) -> RepositoryResult<Option<Selector>>;
}

pub trait SelectorWriter {
    /// Inserts a selector when the payload carries no identifier, otherwise
    /// updates the addressed one. Returns the number of affected rows.
    fn create_or_update_selector(&self, dto: &SelectorDto) -> RepositoryResult<usize>;
    /// Removes the selectors with the given identifiers, returning how many
    /// rows were deleted.
    fn delete_selectors(&self, ids: &[String]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_sets_plugin_filter() {
        let query = SelectorQuery::new(PageParameter::new(Some(1), Some(10)))
            .plugin_id(PluginId::new("plugin-7").expect("valid plugin id"));

        assert_eq!(query.plugin_id.as_deref(), Some("plugin-7"));
        assert_eq!(query.page.page_size, Some(10));
    }
}
