// product_service/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `products` table, and the JSON shape returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub description: Option<String>,
  #[serde(with = "rust_decimal::serde::float_option")]
  pub price: Option<Decimal>,
  pub stock: Option<i32>,
}

/// Fields for an insert. The store assigns `id`; `None` columns are stored as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub stock: Option<i32>,
}

/// A partial update. Outer `None` leaves the column alone, `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<Option<String>>,
  pub price: Option<Option<Decimal>>,
  pub stock: Option<Option<i32>>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.description.is_none() && self.price.is_none() && self.stock.is_none()
  }

  /// Writes every present field onto `product`, leaving the rest untouched.
  pub fn apply_to(self, product: &mut Product) {
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(stock) = self.stock {
      product.stock = stock;
    }
  }
}
