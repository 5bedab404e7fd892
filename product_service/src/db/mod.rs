// product_service/src/db/mod.rs

pub mod admin;
pub mod postgres;
pub mod seed;
mod store;

pub use postgres::PgProductStore;
pub use store::ProductStore;
