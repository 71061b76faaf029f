//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::selector::Selector;
use crate::domain::types::SelectorId;
use crate::dto::selector::SelectorDto;
use crate::pagination::Pager;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SelectorQuery, SelectorReader, SelectorWriter};

mock! {
    pub Repository {}

    impl SelectorReader for Repository {
        fn list_selectors_by_page(&self, query: &SelectorQuery) -> RepositoryResult<Pager<Selector>>;
        fn find_selector_by_id(&self, id: &SelectorId) -> RepositoryResult<Option<Selector>>;
    }

    impl SelectorWriter for Repository {
        fn create_or_update_selector(&self, dto: &SelectorDto) -> RepositoryResult<usize>;
        fn delete_selectors(&self, ids: &[String]) -> RepositoryResult<usize>;
    }
}
