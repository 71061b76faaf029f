//! Repository implementation for gateway selectors.

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        selector::Selector,
        types::{PluginId, SelectorId},
    },
    dto::selector::SelectorDto,
    models::selector::{NewSelector, Selector as DbSelector, UpdateSelector},
    pagination::{self, Pager},
    repository::{
        DieselRepository, SelectorQuery, SelectorReader, SelectorWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl SelectorReader for DieselRepository {
    fn list_selectors_by_page(&self, query: &SelectorQuery) -> RepositoryResult<Pager<Selector>> {
        use crate::schema::selectors;

        let mut conn = self.conn()?;

        let (current_page, page_size) = query.page.resolve();
        let offset = i64::try_from(pagination::offset(current_page, page_size))
            .map_err(|_| RepositoryError::ValidationError("page offset overflow".to_string()))?;

        let mut items = selectors::table.into_boxed();
        let mut count = selectors::table.into_boxed();

        if let Some(plugin_id) = &query.plugin_id {
            items = items.filter(selectors::plugin_id.eq(plugin_id.as_str()));
            count = count.filter(selectors::plugin_id.eq(plugin_id.as_str()));
        }

        let total: i64 = count.count().get_result(&mut conn)?;

        let items = items
            .order((selectors::sort.asc(), selectors::id.asc()))
            .limit(i64::from(page_size))
            .offset(offset)
            .load::<DbSelector>(&mut conn)?
            .into_iter()
            .map(|db_selector| Selector::try_from(db_selector).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Ok(Pager::new(
            items,
            u64::try_from(total).unwrap_or_default(),
            current_page,
            page_size,
        ))
    }

    fn find_selector_by_id(&self, id: &SelectorId) -> RepositoryResult<Option<Selector>> {
        use crate::schema::selectors;

        let mut conn = self.conn()?;
        let db_selector = selectors::table
            .find(id.as_str())
            .first::<DbSelector>(&mut conn)
            .optional()?;

        match db_selector {
            Some(db_selector) => Ok(Some(
                Selector::try_from(db_selector).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }
}

impl SelectorWriter for DieselRepository {
    fn create_or_update_selector(&self, dto: &SelectorDto) -> RepositoryResult<usize> {
        use crate::schema::selectors;

        PluginId::new(dto.plugin_id.as_str())?;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = match dto.selector_id() {
            None => {
                let id = Uuid::new_v4().simple().to_string();
                let new_selector = NewSelector::from_dto(&id, dto, now);
                diesel::insert_into(selectors::table)
                    .values(&new_selector)
                    .execute(&mut conn)?
            }
            Some(id) => diesel::update(selectors::table.find(id.as_str()))
                .set(&UpdateSelector::from_dto(dto, now))
                .execute(&mut conn)?,
        };

        Ok(affected)
    }

    fn delete_selectors(&self, ids: &[String]) -> RepositoryResult<usize> {
        use crate::schema::selectors;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(selectors::table.filter(selectors::id.eq_any(ids)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
