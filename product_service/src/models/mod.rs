// product_service/src/models/mod.rs

//! Data structures representing the `products` table.

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
