use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::bookmarks::{BookmarkForm, BookmarkFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::bookmarks::{
    create_bookmark as create_bookmark_service, delete_bookmark as delete_bookmark_service,
    get_bookmark as get_bookmark_service, list_bookmarks as list_bookmarks_service,
    list_tags as list_tags_service, search_bookmarks as search_bookmarks_service,
    update_bookmark as update_bookmark_service,
};

#[derive(Deserialize, Debug)]
struct SearchQueryParams {
    term: String,
}

#[get("/api/bookmarks")]
pub async fn list_bookmarks(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_bookmarks_service(repo.get_ref()) {
        Ok(bookmarks) => HttpResponse::Ok().json(bookmarks),
        Err(err) => error_response(err),
    }
}

#[get("/api/bookmarks/search")]
pub async fn search_bookmarks(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_bookmarks_service(&params.term, repo.get_ref()) {
        Ok(bookmarks) => HttpResponse::Ok().json(bookmarks),
        Err(err) => error_response(err),
    }
}

#[get("/api/bookmarks/{bookmark_id}")]
pub async fn get_bookmark(
    bookmark_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_bookmark_service(bookmark_id.into_inner(), repo.get_ref()) {
        Ok(bookmark) => HttpResponse::Ok().json(bookmark),
        Err(err) => error_response(err),
    }
}

#[post("/api/bookmarks")]
pub async fn create_bookmark(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookmarkForm>,
) -> impl Responder {
    let payload: BookmarkFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match create_bookmark_service(payload, repo.get_ref()) {
        Ok(bookmark) => HttpResponse::Created().json(bookmark),
        Err(err) => error_response(err),
    }
}

#[put("/api/bookmarks/{bookmark_id}")]
pub async fn update_bookmark(
    bookmark_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookmarkForm>,
) -> impl Responder {
    let payload: BookmarkFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match update_bookmark_service(bookmark_id.into_inner(), payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/api/bookmarks/{bookmark_id}")]
pub async fn delete_bookmark(
    bookmark_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_bookmark_service(bookmark_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/api/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_tags_service(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response(err),
    }
}
