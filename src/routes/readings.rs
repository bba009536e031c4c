use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::readings::{
    StartReadingForm, StartReadingFormPayload, UpdateReadingForm, UpdateReadingFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::readings::{
    delete_reading as delete_reading_service, list_readings as list_readings_service,
    start_reading as start_reading_service, update_reading as update_reading_service,
};

#[get("/api/books/{book_id}/readings")]
pub async fn list_readings(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_readings_service(book_id.into_inner(), repo.get_ref()) {
        Ok(readings) => HttpResponse::Ok().json(readings),
        Err(err) => error_response(err),
    }
}

#[post("/api/books/{book_id}/readings")]
pub async fn start_reading(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<StartReadingForm>,
) -> impl Responder {
    let payload: StartReadingFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match start_reading_service(book_id.into_inner(), payload, repo.get_ref()) {
        Ok(reading) => HttpResponse::Created().json(reading),
        Err(err) => error_response(err),
    }
}

#[put("/api/readings/{reading_id}")]
pub async fn update_reading(
    reading_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateReadingForm>,
) -> impl Responder {
    let payload: UpdateReadingFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match update_reading_service(reading_id.into_inner(), payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/api/readings/{reading_id}")]
pub async fn delete_reading(
    reading_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_reading_service(reading_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
