// bloomshop/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Invalid State: {0}")]
  InvalidState(String),

  #[error("Unsupported Media Type: {0}")]
  UnsupportedMedia(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

/// Reclassifies a unique-constraint violation as [`AppError::Conflict`],
/// passing every other database error through as [`AppError::Sqlx`].
///
/// Uniqueness of `market.url_keyword` and `orders.order_uid` is enforced by
/// the storage engine, so insert paths funnel their errors through here.
pub fn classify_unique_violation(err: sqlx::Error, conflict_msg: &str) -> AppError {
  match &err {
    sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
      AppError::Conflict(conflict_msg.to_string())
    }
    _ => AppError::Sqlx(err),
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::InvalidState(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::UnsupportedMedia(m) => HttpResponse::UnsupportedMediaType().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn validation_maps_to_bad_request() {
    let resp = AppError::Validation("amount must be positive".into()).error_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn not_found_maps_to_404() {
    let resp = AppError::NotFound("Market item not found.".into()).error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn conflict_and_invalid_state_map_to_409() {
    let conflict = AppError::Conflict("url_keyword 'rose-basket' already exists".into());
    let state = AppError::InvalidState("order is already CANCELED".into());
    assert_eq!(conflict.error_response().status(), StatusCode::CONFLICT);
    assert_eq!(state.error_response().status(), StatusCode::CONFLICT);
  }

  #[test]
  fn unsupported_media_maps_to_415() {
    let resp = AppError::UnsupportedMedia("only .csv uploads are accepted".into()).error_response();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
  }

  #[test]
  fn non_database_sqlx_error_stays_sqlx() {
    let err = classify_unique_violation(sqlx::Error::RowNotFound, "should not surface");
    assert!(matches!(err, AppError::Sqlx(_)));
  }
}
