// product_service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::schema::ProductSchema;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list_all().await?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get_by_id(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with id {} not found.", product_id);
      Err(AppError::product_not_found(product_id))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let new_product = ProductSchema::load_new(&payload)?;
  let product = app_state.store.create(new_product).await?;

  info!(product_id = product.id, "Product created.");
  Ok(HttpResponse::Ok().json(product))
}

// The row is looked up before the body is read, so a missing id is a 404 whatever the body holds.
#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.store.get_by_id(product_id).await?.is_none() {
    warn!("Product with id {} not found for update.", product_id);
    return Err(AppError::product_not_found(product_id));
  }

  let payload = ProductSchema::parse_body(&body)?;
  let patch = ProductSchema::load_patch(&payload)?;

  match app_state.store.update_by_id(product_id, patch).await? {
    Some(product) => {
      info!("Product {} updated.", product_id);
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Product with id {} removed before update.", product_id);
      Err(AppError::product_not_found(product_id))
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.store.delete_by_id(product_id).await? {
    info!("Product {} deleted.", product_id);
    Ok(HttpResponse::NoContent().finish())
  } else {
    warn!("Product with id {} not found for delete.", product_id);
    Err(AppError::product_not_found(product_id))
  }
}
