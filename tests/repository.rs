use selector_admin::domain::types::{PluginId, SelectorId};
use selector_admin::dto::selector::SelectorDto;
use selector_admin::pagination::PageParameter;
use selector_admin::repository::errors::RepositoryError;
use selector_admin::repository::{
    DieselRepository, SelectorQuery, SelectorReader, SelectorWriter,
};

mod common;

fn new_selector(plugin_id: &str, name: &str, sort: i32) -> SelectorDto {
    SelectorDto {
        id: None,
        plugin_id: plugin_id.into(),
        name: name.into(),
        match_mode: 0,
        selector_type: 1,
        sort,
        enabled: true,
        loged: false,
        continued: true,
        handle: None,
    }
}

fn plugin(id: &str) -> PluginId {
    PluginId::new(id).expect("valid plugin id")
}

#[test]
fn test_selector_repository_crud() {
    let test_db = common::TestDb::new("test_selector_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(
        repo.create_or_update_selector(&new_selector("plugin-7", "first", 2))
            .unwrap(),
        1
    );
    assert_eq!(
        repo.create_or_update_selector(&new_selector("plugin-7", "second", 1))
            .unwrap(),
        1
    );
    assert_eq!(
        repo.create_or_update_selector(&new_selector("plugin-7", "third", 3))
            .unwrap(),
        1
    );
    assert_eq!(
        repo.create_or_update_selector(&new_selector("other", "foreign", 1))
            .unwrap(),
        1
    );

    let query = SelectorQuery::new(PageParameter::new(Some(1), Some(10))).plugin_id(plugin("plugin-7"));
    let page = repo.list_selectors_by_page(&query).unwrap();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 3);
    let names: Vec<_> = page.items.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first", "third"]);

    let second = page.items[0].clone();
    let found = repo.find_selector_by_id(&second.id).unwrap().unwrap();
    assert_eq!(found.id, second.id);
    assert_eq!(found.plugin_id.as_str(), "plugin-7");

    let update = SelectorDto {
        name: "renamed".into(),
        handle: Some("{\"weight\":50}".into()),
        ..new_selector("plugin-7", "ignored", 1)
    }
    .with_id(second.id.clone());
    assert_eq!(repo.create_or_update_selector(&update).unwrap(), 1);

    let renamed = repo.find_selector_by_id(&second.id).unwrap().unwrap();
    assert_eq!(renamed.name, "renamed");
    assert_eq!(renamed.handle.as_deref(), Some("{\"weight\":50}"));
    assert_eq!(renamed.date_created, second.date_created);

    let deleted = repo
        .delete_selectors(&[second.id.to_string(), "unknown".to_string()])
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(repo.find_selector_by_id(&second.id).unwrap().is_none());

    let remaining = repo.list_selectors_by_page(&query).unwrap();
    assert_eq!(remaining.total_count, 2);
}

#[test]
fn test_selector_paging_respects_page_size() {
    let test_db = common::TestDb::new("test_selector_paging.db");
    let repo = DieselRepository::new(test_db.pool());

    for sort in 0..5 {
        repo.create_or_update_selector(&new_selector("divide", &format!("s{sort}"), sort))
            .unwrap();
    }

    let query = SelectorQuery::new(PageParameter::new(Some(2), Some(2)));
    let page = repo.list_selectors_by_page(&query).unwrap();

    assert_eq!(page.total_count, 5);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "s2");
    assert_eq!(page.page.total_page, 3);
    assert_eq!(page.page.offset, 2);

    let last = repo
        .list_selectors_by_page(&SelectorQuery::new(PageParameter::new(Some(3), Some(2))))
        .unwrap();
    assert_eq!(last.items.len(), 1);

    let defaults = repo
        .list_selectors_by_page(&SelectorQuery::new(PageParameter::default()))
        .unwrap();
    assert_eq!(defaults.page.current_page, 1);
    assert_eq!(defaults.page.page_size, 12);
    assert_eq!(defaults.items.len(), 5);
}

#[test]
fn test_update_of_unknown_selector_affects_nothing() {
    let test_db = common::TestDb::new("test_update_unknown.db");
    let repo = DieselRepository::new(test_db.pool());

    let update = new_selector("divide", "ghost", 1)
        .with_id(SelectorId::new("does-not-exist").expect("valid id"));

    assert_eq!(repo.create_or_update_selector(&update).unwrap(), 0);

    let page = repo
        .list_selectors_by_page(&SelectorQuery::default())
        .unwrap();
    assert_eq!(page.total_count, 0);
}

#[test]
fn test_repeated_update_is_idempotent() {
    let test_db = common::TestDb::new("test_repeated_update.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_or_update_selector(&new_selector("divide", "s", 1))
        .unwrap();
    let id = repo
        .list_selectors_by_page(&SelectorQuery::default())
        .unwrap()
        .items
        .remove(0)
        .id;

    let update = new_selector("divide", "same", 4).with_id(id.clone());
    repo.create_or_update_selector(&update).unwrap();
    let first = repo.find_selector_by_id(&id).unwrap().unwrap();
    repo.create_or_update_selector(&update).unwrap();
    let second = repo.find_selector_by_id(&id).unwrap().unwrap();

    assert_eq!(first.name, second.name);
    assert_eq!(first.sort, second.sort);
    assert_eq!(first.plugin_id, second.plugin_id);
}

#[test]
fn test_empty_delete_removes_nothing() {
    let test_db = common::TestDb::new("test_empty_delete.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_or_update_selector(&new_selector("divide", "s", 1))
        .unwrap();

    assert_eq!(repo.delete_selectors(&[]).unwrap(), 0);
    assert_eq!(
        repo.list_selectors_by_page(&SelectorQuery::default())
            .unwrap()
            .total_count,
        1
    );
}

#[test]
fn test_blank_plugin_is_rejected() {
    let test_db = common::TestDb::new("test_blank_plugin.db");
    let repo = DieselRepository::new(test_db.pool());

    let result = repo.create_or_update_selector(&new_selector("  ", "s", 1));

    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
}
