// product_service/src/state.rs
use crate::config::AppConfig;
use crate::db::ProductStore;
use std::sync::Arc;

/// Shared per-process context handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
