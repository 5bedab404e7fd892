// tests/common/mod.rs
#![allow(dead_code, unused_macros)] // Not every test binary uses every helper

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use product_service::config::{AppConfig, LogFormat};
use product_service::db::ProductStore;
use product_service::models::{NewProduct, Product, ProductPatch};
use product_service::state::AppState;
use product_service::{AppError, Result};
use tracing::Level;

const STOCK_CHECK_MESSAGE: &str =
  "new row for relation \"products\" violates check constraint \"products_stock_check\"";

// --- In-memory store mirroring the products table, including its stock check ---
#[derive(Default)]
struct Table {
  rows: BTreeMap<i32, Product>,
  last_id: i32,
}

#[derive(Default)]
pub struct MemoryProductStore {
  table: Mutex<Table>,
}

impl MemoryProductStore {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn len(&self) -> usize {
    self.table.lock().unwrap().rows.len()
  }

  pub fn snapshot(&self) -> Vec<Product> {
    self.table.lock().unwrap().rows.values().cloned().collect()
  }
}

fn check_stock(product: &Product) -> Result<()> {
  match product.stock {
    Some(stock) if stock < 0 => Err(AppError::ConstraintViolation(STOCK_CHECK_MESSAGE.to_string())),
    _ => Ok(()),
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn list_all(&self) -> Result<Vec<Product>> {
    Ok(self.snapshot())
  }

  async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>> {
    Ok(self.table.lock().unwrap().rows.get(&product_id).cloned())
  }

  async fn create(&self, new_product: NewProduct) -> Result<Product> {
    let mut table = self.table.lock().unwrap();
    let product = Product {
      id: table.last_id + 1,
      name: new_product.name,
      description: new_product.description,
      price: new_product.price,
      stock: new_product.stock,
    };
    check_stock(&product)?;

    table.last_id = product.id;
    table.rows.insert(product.id, product.clone());
    Ok(product)
  }

  async fn update_by_id(&self, product_id: i32, patch: ProductPatch) -> Result<Option<Product>> {
    let mut table = self.table.lock().unwrap();
    let Some(current) = table.rows.get(&product_id) else {
      return Ok(None);
    };

    let mut updated = current.clone();
    patch.apply_to(&mut updated);
    check_stock(&updated)?;

    table.rows.insert(product_id, updated.clone());
    Ok(Some(updated))
  }

  async fn delete_by_id(&self, product_id: i32) -> Result<bool> {
    Ok(self.table.lock().unwrap().rows.remove(&product_id).is_some())
  }
}

// --- App wiring ---
pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused".to_string(),
    database_max_connections: 1,
    log_format: LogFormat::Pretty,
  }
}

pub fn test_state(store: Arc<MemoryProductStore>) -> AppState {
  AppState {
    store,
    config: Arc::new(test_config()),
  }
}

/// Builds the real route table over `$store` and returns the initialised test service.
macro_rules! init_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(common::test_state($store)))
        .configure(product_service::web::configure_app_routes),
    )
    .await
  };
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
