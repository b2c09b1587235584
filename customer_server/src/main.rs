//! Customer API server.
//!
//! Run from repo root: `cargo run -p customer-server`
//! `STORAGE=memory` serves without a database.

use customer_api::{
    app_router, ensure_customer_table, ensure_database_exists, AppState, CustomerRepository,
    InMemoryCustomerRepository, PgCustomerRepository, ServiceConfig, StorageKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("customer_api=info,customer_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServiceConfig::from_env()?;

    let repo: Arc<dyn CustomerRepository> = match config.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_customer_table(&pool, &config.schema).await?;
            Arc::new(PgCustomerRepository::new(pool, &config.schema))
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let app = app_router(AppState::new(repo), config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
