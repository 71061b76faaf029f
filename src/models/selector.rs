//! Diesel models representing selectors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::selector::Selector as DomainSelector;
use crate::domain::types::{PluginId, SelectorId, TypeConstraintError};
use crate::dto::selector::SelectorDto;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::selectors)]
/// Diesel model for [`crate::domain::selector::Selector`].
pub struct Selector {
    pub id: String,
    pub plugin_id: String,
    pub name: String,
    pub match_mode: i32,
    pub selector_type: i32,
    pub sort: i32,
    pub enabled: bool,
    pub loged: bool,
    pub continued: bool,
    pub handle: Option<String>,
    pub date_created: NaiveDateTime,
    pub date_updated: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::selectors)]
/// Insertable form of [`Selector`].
pub struct NewSelector<'a> {
    pub id: &'a str,
    pub plugin_id: &'a str,
    pub name: &'a str,
    pub match_mode: i32,
    pub selector_type: i32,
    pub sort: i32,
    pub enabled: bool,
    pub loged: bool,
    pub continued: bool,
    pub handle: Option<&'a str>,
    pub date_created: NaiveDateTime,
    pub date_updated: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::selectors)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Selector`] record.
pub struct UpdateSelector<'a> {
    pub plugin_id: &'a str,
    pub name: &'a str,
    pub match_mode: i32,
    pub selector_type: i32,
    pub sort: i32,
    pub enabled: bool,
    pub loged: bool,
    pub continued: bool,
    pub handle: Option<&'a str>,
    pub date_updated: NaiveDateTime,
}

impl<'a> NewSelector<'a> {
    pub fn from_dto(id: &'a str, dto: &'a SelectorDto, now: NaiveDateTime) -> Self {
        Self {
            id,
            plugin_id: dto.plugin_id.as_str(),
            name: dto.name.as_str(),
            match_mode: dto.match_mode,
            selector_type: dto.selector_type,
            sort: dto.sort,
            enabled: dto.enabled,
            loged: dto.loged,
            continued: dto.continued,
            handle: dto.handle.as_deref(),
            date_created: now,
            date_updated: now,
        }
    }
}

impl<'a> UpdateSelector<'a> {
    pub fn from_dto(dto: &'a SelectorDto, now: NaiveDateTime) -> Self {
        Self {
            plugin_id: dto.plugin_id.as_str(),
            name: dto.name.as_str(),
            match_mode: dto.match_mode,
            selector_type: dto.selector_type,
            sort: dto.sort,
            enabled: dto.enabled,
            loged: dto.loged,
            continued: dto.continued,
            handle: dto.handle.as_deref(),
            date_updated: now,
        }
    }
}

impl TryFrom<Selector> for DomainSelector {
    type Error = TypeConstraintError;

    fn try_from(selector: Selector) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SelectorId::new(selector.id)?,
            plugin_id: PluginId::new(selector.plugin_id)?,
            name: selector.name,
            match_mode: selector.match_mode,
            selector_type: selector.selector_type,
            sort: selector.sort,
            enabled: selector.enabled,
            loged: selector.loged,
            continued: selector.continued,
            handle: selector.handle,
            date_created: selector.date_created,
            date_updated: selector.date_updated,
        })
    }
}
