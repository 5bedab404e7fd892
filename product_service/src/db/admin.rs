// product_service/src/db/admin.rs

//! Operator commands: re-create the schema, load the sample catalog.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::db::postgres::{insert_product, map_db_error};
use crate::db::seed;
use crate::errors::Result;

pub const DROP_PRODUCTS_TABLE: &str = "DROP TABLE IF EXISTS products";

pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE products (
  id          SERIAL PRIMARY KEY,
  name        VARCHAR(150) NOT NULL,
  description TEXT,
  price       NUMERIC(10, 2),
  stock       INTEGER CONSTRAINT products_stock_check CHECK (stock >= 0)
)"#;

/// Drops and re-creates the `products` table. Destroys existing rows.
#[instrument(name = "admin::init_schema", skip(pool))]
pub async fn init_schema(pool: &PgPool) -> Result<()> {
  let mut tx = pool.begin().await.map_err(map_db_error)?;
  sqlx::query(DROP_PRODUCTS_TABLE)
    .execute(&mut *tx)
    .await
    .map_err(map_db_error)?;
  sqlx::query(CREATE_PRODUCTS_TABLE)
    .execute(&mut *tx)
    .await
    .map_err(map_db_error)?;
  tx.commit().await.map_err(map_db_error)?;

  info!("Created tables");
  Ok(())
}

/// Inserts the sample catalog in a single transaction and returns the number of rows written.
#[instrument(name = "admin::seed", skip(pool))]
pub async fn seed(pool: &PgPool) -> Result<usize> {
  let products = seed::catalog();

  let mut tx = pool.begin().await.map_err(map_db_error)?;
  for product in &products {
    insert_product(&mut *tx, product).await?;
  }
  tx.commit().await.map_err(map_db_error)?;

  info!("DB Seeded with {} products", products.len());
  Ok(products.len())
}
