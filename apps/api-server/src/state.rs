//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, SeaOrmPostRepository, Store};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store: Store,
}

impl AppState {
    /// Connect to the store and bring its schema up to date.
    ///
    /// Must complete before the server accepts requests.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let store = Store::init(config).await?;

        tracing::info!("Applying pending migrations");
        Migrator::up(store.conn(), None).await?;

        Ok(Self::from_store(store))
    }

    /// Build the state around an already migrated store.
    pub fn from_store(store: Store) -> Self {
        let posts = Arc::new(SeaOrmPostRepository::new(store.shared_conn()));

        tracing::info!("Application state initialized");

        Self { posts, store }
    }
}
