//! Domain service for catalog operations.
//!
//! Sits between the HTTP handlers and the record store: converts inbound
//! DTOs into domain records, invokes the store, and shapes results back into
//! the same field set the caller sent (the read and write schemas are
//! symmetric).

use crate::api::types::TvShowDto;
use crate::db::StoreError;
use crate::models::TvShow;
use thiserror::Error;

/// Domain errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Database(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => Self::Duplicate(err.to_string()),
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Catalog operations exposed to the HTTP layer.
///
/// Every operation is a single store interaction; there is no background
/// work, no retries, and no partial success.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Creates a new record.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Duplicate`] if `show_id` already exists
    /// - [`CatalogError::Database`] on storage failures
    async fn create_show(&self, input: TvShowDto) -> Result<(), CatalogError>;

    /// Lists records with limit/offset pagination. A `limit` larger than the
    /// table is clamped down to the row count; an empty page is reported as
    /// [`CatalogError::NotFound`], not as an empty list.
    async fn list_shows(&self, limit: u64, offset: u64) -> Result<Vec<TvShowDto>, CatalogError>;

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has that id.
    async fn get_show(&self, show_id: i32) -> Result<TvShowDto, CatalogError>;

    /// Returns all records whose genre exactly equals `genre`
    /// (case-sensitive). Zero matches is [`CatalogError::NotFound`].
    async fn search_by_genre(&self, genre: &str) -> Result<Vec<TvShowDto>, CatalogError>;

    /// Replaces every field of an existing record. The `show_id` inside
    /// `input` is ignored; the identifier comes from the caller and is
    /// immutable.
    async fn update_show(&self, show_id: i32, input: TvShowDto) -> Result<(), CatalogError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if nothing was deleted.
    async fn delete_show(&self, show_id: i32) -> Result<(), CatalogError>;
}

pub(crate) fn show_to_dto(show: TvShow) -> TvShowDto {
    TvShowDto {
        show_id: show.show_id,
        show_type: show.show_type,
        genre: show.genre,
        title: show.title,
        director: show.director,
        cast: show.cast,
        country: show.country,
        date_added: show.date_added,
        release_year: show.release_year,
        rating: show.rating,
        duration: show.duration,
    }
}

/// `show_id` is taken from the caller, not the payload, so path parameters
/// win over the body on update.
pub(crate) fn dto_to_show(show_id: i32, dto: TvShowDto) -> TvShow {
    TvShow {
        show_id,
        show_type: dto.show_type,
        genre: dto.genre,
        title: dto.title,
        director: dto.director,
        cast: dto.cast,
        country: dto.country,
        date_added: dto.date_added,
        release_year: dto.release_year,
        rating: dto.rating,
        duration: dto.duration,
    }
}
