//! Service-level scenarios exercised against a real SQLite database.

use reader_buddy::forms::bookmarks::{BookmarkForm, BookmarkFormPayload};
use reader_buddy::repository::DieselRepository;
use reader_buddy::services::ServiceError;
use reader_buddy::services::bookmarks::{
    create_bookmark, delete_bookmark, get_bookmark, list_bookmarks, list_tags, search_bookmarks,
    update_bookmark,
};

mod common;

fn payload(title: &str, url: &str, description: &str, tags: &[&str]) -> BookmarkFormPayload {
    let form = BookmarkForm {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    form.try_into().expect("form should validate")
}

#[test]
fn creating_a_bookmark_attaches_its_tags() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_bookmark(
        payload("Site", "http://a.example", "", &["news", "tech"]),
        &repo,
    )
    .expect("should create bookmark");

    let names: Vec<&str> = created.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["news", "tech"]);
    assert_eq!(created.created_at, created.updated_at);

    // The hydrated read agrees with the creation response.
    let fetched = get_bookmark(created.id, &repo).expect("should fetch bookmark");
    assert_eq!(fetched.tags.len(), 2);
}

#[test]
fn updating_a_missing_bookmark_changes_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = update_bookmark(1234, payload("T", "http://a.example", "", &["x"]), &repo)
        .expect_err("update should fail");

    assert!(matches!(err, ServiceError::NotFound));
    assert!(list_bookmarks(&repo).expect("should list").is_empty());
    assert!(list_tags(&repo).expect("should list tags").is_empty());
}

#[test]
fn deleting_a_missing_bookmark_succeeds() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(delete_bookmark(1234, &repo).is_ok());
}

#[test]
fn varied_case_and_whitespace_tags_are_trim_normalized_only() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_bookmark(
        payload("Site", "http://a.example", "", &["Tag", "tag", " tag "]),
        &repo,
    )
    .expect("should create bookmark");

    // No case folding: "Tag" and "tag" are distinct, " tag " trims into
    // the existing "tag".
    let names: Vec<&str> = created.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Tag", "tag"]);

    let mut all: Vec<String> = list_tags(&repo)
        .expect("should list tags")
        .into_iter()
        .map(|t| t.name)
        .collect();
    all.sort();
    assert_eq!(all, vec!["Tag", "tag"]);
}

#[test]
fn updates_replace_fields_and_advance_updated_at() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_bookmark(payload("Old", "http://a.example", "", &["x"]), &repo)
        .expect("should create bookmark");

    update_bookmark(
        created.id,
        payload("New", "http://b.example", "fresh", &["y"]),
        &repo,
    )
    .expect("should update bookmark");

    let fetched = get_bookmark(created.id, &repo).expect("should fetch bookmark");
    assert_eq!(fetched.title, "New");
    assert_eq!(fetched.url, "http://b.example");
    assert_eq!(fetched.description, "fresh");
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at >= fetched.created_at);

    let names: Vec<&str> = fetched.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["y"]);
}

#[test]
fn search_rejects_blank_terms_before_touching_the_store() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(matches!(
        search_bookmarks("", &repo),
        Err(ServiceError::Form(_))
    ));
    assert!(matches!(
        search_bookmarks("   ", &repo),
        Err(ServiceError::Form(_))
    ));
}

#[test]
fn search_results_come_back_hydrated() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    create_bookmark(
        payload("Go Guide", "http://example.com/a", "", &["lang"]),
        &repo,
    )
    .expect("should create bookmark");

    let results = search_bookmarks("Guide", &repo).expect("should search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].tags.len(), 1);
    assert_eq!(results[0].tags[0].name, "lang");
}

#[test]
fn bookmark_dto_serializes_tags_as_objects() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_bookmark(
        payload("Site", "http://a.example", "", &["news"]),
        &repo,
    )
    .expect("should create bookmark");

    let value = serde_json::to_value(&created).expect("should serialize");
    assert!(value["id"].is_number());
    assert_eq!(value["title"], "Site");
    assert_eq!(value["tags"][0]["name"], "news");
    assert_eq!(value["tags"][0]["color"], "#007bff");
}

#[test]
fn listing_preserves_insertion_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    create_bookmark(payload("First", "http://a.example", "", &[]), &repo)
        .expect("should create bookmark");
    create_bookmark(payload("Second", "http://b.example", "", &[]), &repo)
        .expect("should create bookmark");

    let titles: Vec<String> = list_bookmarks(&repo)
        .expect("should list")
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
