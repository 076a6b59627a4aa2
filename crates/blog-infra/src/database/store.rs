use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Handle to the relational store.
///
/// Built once at startup and shared by every request. Clones share the
/// same pool.
#[derive(Clone)]
pub struct Store {
    conn: Arc<DbConn>,
}

impl Store {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            backend = ?conn.get_database_backend(),
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Shared handle for repositories.
    pub fn shared_conn(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }

    /// Close the pool. Every handle sharing it fails from then on.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.conn.close_by_ref().await
    }
}
