// product_service/src/web/routes.rs

use actix_web::{error::JsonPayloadError, http::header::ContentType, web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::schema::ValidationErrors;
use crate::web::handlers::product_handlers;

async fn home_handler() -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::plaintext()).body("Hello!")
}

// Unparsable bodies get the same 400 shape as schema failures.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(ValidationErrors::schema(err.to_string())).into()
}

/// Called from `main.rs` (and the integration tests) to mount every route on an actix `App`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/", web::get().to(home_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
        .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
    );
}
