// product_service/src/lib.rs

//! CRUD HTTP service for a single Product resource backed by Postgres.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod schema;
pub mod state;
pub mod web;

pub use errors::{AppError, Result};
