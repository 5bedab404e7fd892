// product_service/src/db/postgres.rs

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, info, instrument};

use crate::db::store::ProductStore;
use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product, ProductPatch};

const SELECT_ALL: &str = "SELECT id, name, description, price, stock FROM products ORDER BY id ASC";

const SELECT_BY_ID: &str = "SELECT id, name, description, price, stock FROM products WHERE id = $1";

const SELECT_BY_ID_FOR_UPDATE: &str =
  "SELECT id, name, description, price, stock FROM products WHERE id = $1 FOR UPDATE";

const INSERT: &str = "INSERT INTO products (name, description, price, stock) VALUES ($1, $2, $3, $4) \
                      RETURNING id, name, description, price, stock";

const UPDATE: &str = "UPDATE products SET name = $2, description = $3, price = $4, stock = $5 WHERE id = $1 \
                      RETURNING id, name, description, price, stock";

const DELETE: &str = "DELETE FROM products WHERE id = $1";

/// [`ProductStore`] backed by a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

/// Check-constraint failures become [`AppError::ConstraintViolation`]; anything else stays a database error.
pub(crate) fn map_db_error(err: sqlx::Error) -> AppError {
  if let sqlx::Error::Database(db_err) = &err {
    if db_err.is_check_violation() {
      debug!(constraint = ?db_err.constraint(), "Write rejected by check constraint: {}", db_err.message());
      return AppError::ConstraintViolation(db_err.message().to_string());
    }
  }
  AppError::Sqlx(err)
}

/// Inserts one row on an open connection or transaction.
pub(crate) async fn insert_product(conn: &mut PgConnection, new_product: &NewProduct) -> Result<Product> {
  sqlx::query_as::<_, Product>(INSERT)
    .bind(&new_product.name)
    .bind(&new_product.description)
    .bind(new_product.price)
    .bind(new_product.stock)
    .fetch_one(conn)
    .await
    .map_err(map_db_error)
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "store::list_all", skip(self))]
  async fn list_all(&self) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(SELECT_ALL)
      .fetch_all(&self.pool)
      .await
      .map_err(map_db_error)?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "store::get_by_id", skip(self))]
  async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>> {
    sqlx::query_as::<_, Product>(SELECT_BY_ID)
      .bind(product_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(map_db_error)
  }

  #[instrument(name = "store::create", skip(self, new_product), fields(name = %new_product.name))]
  async fn create(&self, new_product: NewProduct) -> Result<Product> {
    let mut tx = self.pool.begin().await.map_err(map_db_error)?;
    // Dropping `tx` on an early return rolls the insert back.
    let product = insert_product(&mut *tx, &new_product).await?;
    tx.commit().await.map_err(map_db_error)?;

    info!(product_id = product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "store::update_by_id", skip(self, patch))]
  async fn update_by_id(&self, product_id: i32, patch: ProductPatch) -> Result<Option<Product>> {
    let mut tx = self.pool.begin().await.map_err(map_db_error)?;

    let current = sqlx::query_as::<_, Product>(SELECT_BY_ID_FOR_UPDATE)
      .bind(product_id)
      .fetch_optional(&mut *tx)
      .await
      .map_err(map_db_error)?;

    let Some(mut product) = current else {
      tx.rollback().await.map_err(map_db_error)?;
      return Ok(None);
    };

    patch.apply_to(&mut product);

    let updated = sqlx::query_as::<_, Product>(UPDATE)
      .bind(product.id)
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(product.stock)
      .fetch_one(&mut *tx)
      .await
      .map_err(map_db_error)?;
    tx.commit().await.map_err(map_db_error)?;

    info!("Product updated.");
    Ok(Some(updated))
  }

  #[instrument(name = "store::delete_by_id", skip(self))]
  async fn delete_by_id(&self, product_id: i32) -> Result<bool> {
    let mut tx = self.pool.begin().await.map_err(map_db_error)?;
    let result = sqlx::query(DELETE)
      .bind(product_id)
      .execute(&mut *tx)
      .await
      .map_err(map_db_error)?;
    tx.commit().await.map_err(map_db_error)?;

    Ok(result.rows_affected() > 0)
  }
}
