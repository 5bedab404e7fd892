// product_service/src/db/store.rs

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{NewProduct, Product, ProductPatch};

/// Single-row and full-table access to the `products` table.
///
/// Lookups by id report a missing row as `None` (or `false` for deletes)
/// rather than an error. Writes are committed before the call returns; a
/// rejected write leaves the table unchanged.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product, in id order.
  async fn list_all(&self) -> Result<Vec<Product>>;

  async fn get_by_id(&self, product_id: i32) -> Result<Option<Product>>;

  /// Inserts a row and returns it with its assigned id.
  async fn create(&self, new_product: NewProduct) -> Result<Product>;

  /// Applies `patch` to an existing row. `Ok(None)` if there is no such row.
  async fn update_by_id(&self, product_id: i32, patch: ProductPatch) -> Result<Option<Product>>;

  /// `Ok(true)` if a row was removed.
  async fn delete_by_id(&self, product_id: i32) -> Result<bool>;
}
