use chrono::Utc;

use crate::domain::bookmark::Bookmark;
use crate::domain::types::BookmarkId;
use crate::dto::bookmarks::{BookmarkDto, TagDto};
use crate::forms::bookmarks::BookmarkFormPayload;
use crate::repository::{BookmarkReader, BookmarkWriter, TagReader, TagWriter};

use super::{ServiceError, ServiceResult, storage_error};

/// Populate a bookmark's tag list from its persisted associations.
///
/// An association whose tag no longer resolves is skipped rather than
/// failing the whole read.
fn hydrate<R>(repo: &R, bookmark: Bookmark) -> ServiceResult<BookmarkDto>
where
    R: TagReader,
{
    let tag_ids = repo
        .list_bookmark_tag_ids(bookmark.id)
        .map_err(|e| storage_error("Failed to list bookmark associations", e))?;

    let mut tags = Vec::with_capacity(tag_ids.len());
    for tag_id in tag_ids {
        let tag = repo
            .get_tag_by_id(tag_id)
            .map_err(|e| storage_error("Failed to get tag", e))?;
        if let Some(tag) = tag {
            tags.push(TagDto::from(tag));
        }
    }

    Ok(BookmarkDto::new(bookmark, tags))
}

pub fn list_bookmarks<R>(repo: &R) -> ServiceResult<Vec<BookmarkDto>>
where
    R: BookmarkReader + TagReader,
{
    let bookmarks = repo
        .list_bookmarks()
        .map_err(|e| storage_error("Failed to list bookmarks", e))?;

    bookmarks
        .into_iter()
        .map(|bookmark| hydrate(repo, bookmark))
        .collect()
}

pub fn get_bookmark<R>(id: i32, repo: &R) -> ServiceResult<BookmarkDto>
where
    R: BookmarkReader + TagReader,
{
    let id = BookmarkId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_bookmark_by_id(id) {
        Ok(Some(bookmark)) => hydrate(repo, bookmark),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(storage_error("Failed to get bookmark", e)),
    }
}

pub fn create_bookmark<R>(payload: BookmarkFormPayload, repo: &R) -> ServiceResult<BookmarkDto>
where
    R: BookmarkWriter + TagWriter,
{
    let now = Utc::now().naive_utc();

    let bookmark = repo
        .create_bookmark(&payload.new_bookmark(now))
        .map_err(|e| storage_error("Failed to create bookmark", e))?;

    let tags = repo
        .reconcile_bookmark_tags(bookmark.id, &payload.tags)
        .map_err(|e| storage_error("Failed to reconcile bookmark tags", e))?;

    Ok(BookmarkDto::new(
        bookmark,
        tags.into_iter().map(TagDto::from).collect(),
    ))
}

pub fn update_bookmark<R>(id: i32, payload: BookmarkFormPayload, repo: &R) -> ServiceResult<()>
where
    R: BookmarkWriter + TagWriter,
{
    let id = BookmarkId::new(id).map_err(|_| ServiceError::NotFound)?;
    let now = Utc::now().naive_utc();

    let affected = repo
        .update_bookmark(id, &payload.update_bookmark(now))
        .map_err(|e| storage_error("Failed to update bookmark", e))?;
    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    repo.reconcile_bookmark_tags(id, &payload.tags)
        .map_err(|e| storage_error("Failed to reconcile bookmark tags", e))?;

    Ok(())
}

pub fn delete_bookmark<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: BookmarkWriter,
{
    // Deleting a missing bookmark is a successful no-op.
    let Ok(id) = BookmarkId::new(id) else {
        return Ok(());
    };

    repo.delete_bookmark(id)
        .map_err(|e| storage_error("Failed to delete bookmark", e))?;

    Ok(())
}

pub fn search_bookmarks<R>(term: &str, repo: &R) -> ServiceResult<Vec<BookmarkDto>>
where
    R: BookmarkReader + TagReader,
{
    if term.trim().is_empty() {
        return Err(ServiceError::Form("search term is required".to_string()));
    }

    let bookmarks = repo
        .search_bookmarks(term)
        .map_err(|e| storage_error("Failed to search bookmarks", e))?;

    bookmarks
        .into_iter()
        .map(|bookmark| hydrate(repo, bookmark))
        .collect()
}

pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<TagDto>>
where
    R: TagReader,
{
    let tags = repo
        .list_tags()
        .map_err(|e| storage_error("Failed to list tags", e))?;

    Ok(tags.into_iter().map(TagDto::from).collect())
}
