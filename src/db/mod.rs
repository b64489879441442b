use crate::models::TvShow;
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::tvshow::StoreError;

/// Facade over the database connection pool. Each operation acquires a
/// scoped session from the pool and releases it on completion.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn tvshow_repo(&self) -> repositories::tvshow::TvShowRepository {
        repositories::tvshow::TvShowRepository::new(self.conn.clone())
    }

    pub async fn create_show(&self, show: &TvShow) -> Result<(), StoreError> {
        self.tvshow_repo().create(show).await
    }

    pub async fn list_shows(&self, limit: u64, offset: u64) -> Result<Vec<TvShow>, StoreError> {
        self.tvshow_repo().list(limit, offset).await
    }

    pub async fn get_show(&self, show_id: i32) -> Result<TvShow, StoreError> {
        self.tvshow_repo().get(show_id).await
    }

    pub async fn search_shows_by_genre(&self, genre: &str) -> Result<Vec<TvShow>, StoreError> {
        self.tvshow_repo().search_by_genre(genre).await
    }

    pub async fn update_show(&self, show_id: i32, show: &TvShow) -> Result<(), StoreError> {
        self.tvshow_repo().update(show_id, show).await
    }

    pub async fn delete_show(&self, show_id: i32) -> Result<(), StoreError> {
        self.tvshow_repo().delete(show_id).await
    }

    pub async fn filter_shows(&self, show_id: Option<i32>) -> Result<Vec<TvShow>, StoreError> {
        self.tvshow_repo().filter(show_id).await
    }
}
