// product_service/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::schema::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(#[from] ValidationErrors),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  // A write rejected by a table constraint, e.g. `stock >= 0`.
  #[error("Constraint Violation: {0}")]
  ConstraintViolation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn product_not_found(product_id: i32) -> Self {
    AppError::NotFound(format!("Product with id {} not found", product_id))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::ConstraintViolation(_)
      | AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Validation(errors) => json!({"error": "Validation failed", "detail": errors}),
      AppError::NotFound(m) => json!({"error": m}),
      AppError::ConstraintViolation(m) => json!({"error": "Database constraint violated", "detail": m}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Sqlx(_) => json!({"error": "Database operation failed"}),
      AppError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
