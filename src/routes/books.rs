use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::books::{BookForm, BookFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::books::{
    create_book as create_book_service, delete_book as delete_book_service,
    get_book as get_book_service, list_books as list_books_service,
    search_books as search_books_service, update_book as update_book_service,
};

#[derive(Deserialize, Debug)]
struct SearchQueryParams {
    term: String,
}

#[get("/api/books")]
pub async fn list_books(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_books_service(repo.get_ref()) {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => error_response(err),
    }
}

#[get("/api/books/search")]
pub async fn search_books(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_books_service(&params.term, repo.get_ref()) {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => error_response(err),
    }
}

#[get("/api/books/{book_id}")]
pub async fn get_book(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_book_service(book_id.into_inner(), repo.get_ref()) {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(err) => error_response(err),
    }
}

#[post("/api/books")]
pub async fn create_book(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookForm>,
) -> impl Responder {
    let payload: BookFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match create_book_service(payload, repo.get_ref()) {
        Ok(book) => HttpResponse::Created().json(book),
        Err(err) => error_response(err),
    }
}

#[put("/api/books/{book_id}")]
pub async fn update_book(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BookForm>,
) -> impl Responder {
    let payload: BookFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match update_book_service(book_id.into_inner(), payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/api/books/{book_id}")]
pub async fn delete_book(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_book_service(book_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
