use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Connection handle to the warehouse. Cheap to clone, shared pool inside.
#[derive(Clone)]
pub struct StoreClient {
    pool: PgPool,
}

impl StoreClient {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect(database_url)
            .await
            .context("Failed to connect to warehouse")?;
        info!("Connected to warehouse");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
