use actix_web::HttpResponse;

use crate::services::ServiceError;

pub mod bookmarks;
pub mod books;
pub mod main;
pub mod readings;

/// Translate a service failure into a transport-level status.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Unavailable => HttpResponse::ServiceUnavailable().finish(),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
