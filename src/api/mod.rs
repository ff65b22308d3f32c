pub mod health;
pub mod metrics;
pub mod posts;
pub mod swagger;
pub mod users;

use actix_web::HttpResponse;

use crate::utils::error::AppError;

/// Maps an AppError to its HTTP status with a JSON error body
pub(crate) fn error_response(err: AppError) -> HttpResponse {
    let body = serde_json::json!({
        "success": false,
        "error": err.to_string(),
    });

    match err {
        AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(body),
    }
}
