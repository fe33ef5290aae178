use actix_web::HttpResponse;
use actix_web::web::ServiceConfig;
use serde::Serialize;

use crate::services::ServiceError;

pub mod items;
pub mod users;

/// Register every API route on an actix `App`.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(users::create_user)
        .service(users::find_user)
        .service(users::show_user)
        .service(users::follow_item)
        .service(items::create_item)
        .service(items::find_item)
        .service(items::show_item)
        .service(items::record_price);
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map a service failure onto an HTTP response with a JSON error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::UnprocessableEntity().json(body)
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}
