// product_service/src/main.rs

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use product_service::cli::{Cli, Command};
use product_service::config::{AppConfig, LogFormat};
use product_service::db::{admin, PgProductStore};
use product_service::state::AppState;
use product_service::web::configure_app_routes;

fn init_tracing(format: LogFormat) {
  // INFO unless RUST_LOG says otherwise
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse_args();

  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);
  tracing::info!("Application configuration loaded successfully.");

  let db_pool = PgPoolOptions::new()
    .max_connections(app_config.database_max_connections)
    .connect(&app_config.database_url)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!("Successfully connected to the database.");

  match cli.command() {
    Command::Serve => serve(app_config, db_pool).await,
    Command::InitDb => admin::init_schema(&db_pool)
      .await
      .context("Failed to initialise the database schema"),
    Command::SeedDb => admin::seed(&db_pool)
      .await
      .map(|_| ())
      .context("Failed to seed the database"),
  }
}

async fn serve(app_config: Arc<AppConfig>, db_pool: PgPool) -> anyhow::Result<()> {
  let app_state = web::Data::new(AppState {
    store: Arc::new(PgProductStore::new(db_pool)),
    config: app_config.clone(),
  });

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone()) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
