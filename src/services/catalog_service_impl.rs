//! `SeaORM` implementation of the [`CatalogService`] trait.

use crate::api::types::TvShowDto;
use crate::db::Store;
use crate::services::catalog_service::{CatalogError, CatalogService, dto_to_show, show_to_dto};
use std::sync::Arc;

pub struct SeaOrmCatalogService {
    store: Arc<Store>,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn create_show(&self, input: TvShowDto) -> Result<(), CatalogError> {
        let show = dto_to_show(input.show_id, input);
        self.store.create_show(&show).await?;
        Ok(())
    }

    async fn list_shows(&self, limit: u64, offset: u64) -> Result<Vec<TvShowDto>, CatalogError> {
        let shows = self.store.list_shows(limit, offset).await?;
        Ok(shows.into_iter().map(show_to_dto).collect())
    }

    async fn get_show(&self, show_id: i32) -> Result<TvShowDto, CatalogError> {
        let show = self.store.get_show(show_id).await?;
        Ok(show_to_dto(show))
    }

    async fn search_by_genre(&self, genre: &str) -> Result<Vec<TvShowDto>, CatalogError> {
        let shows = self.store.search_shows_by_genre(genre).await?;
        Ok(shows.into_iter().map(show_to_dto).collect())
    }

    async fn update_show(&self, show_id: i32, input: TvShowDto) -> Result<(), CatalogError> {
        let show = dto_to_show(show_id, input);
        self.store.update_show(show_id, &show).await?;
        Ok(())
    }

    async fn delete_show(&self, show_id: i32) -> Result<(), CatalogError> {
        self.store.delete_show(show_id).await?;
        Ok(())
    }
}
