use crate::entities::{prelude::*, tv_shows};
use crate::models::TvShow;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, TransactionTrait,
};
use thiserror::Error;
use tracing::info;

/// Failures surfaced by the record store itself.
///
/// `AlreadyExists` and `NotFound` are raised by the store and translated by
/// the service layer; anything else bubbles up as `Database`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A TV show with this ID already exists.")]
    AlreadyExists,

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct TvShowRepository {
    conn: DatabaseConnection,
}

impl TvShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_show(model: tv_shows::Model) -> TvShow {
        TvShow {
            show_id: model.show_id,
            show_type: model.show_type,
            genre: model.genre,
            title: model.title,
            director: model.director,
            cast: model.cast,
            country: model.country,
            date_added: model.date_added,
            release_year: model.release_year,
            rating: model.rating,
            duration: model.duration,
        }
    }

    /// Active model carrying every field except the primary key, for
    /// full-replacement updates.
    fn replacement_fields(show: &TvShow) -> tv_shows::ActiveModel {
        tv_shows::ActiveModel {
            show_type: Set(show.show_type.clone()),
            genre: Set(show.genre.clone()),
            title: Set(show.title.clone()),
            director: Set(show.director.clone()),
            cast: Set(show.cast.clone()),
            country: Set(show.country.clone()),
            date_added: Set(show.date_added.clone()),
            release_year: Set(show.release_year),
            rating: Set(show.rating.clone()),
            duration: Set(show.duration.clone()),
            ..Default::default()
        }
    }

    /// Uniqueness is enforced by the primary key, so a race between two
    /// concurrent creates for the same id is settled by the database: the
    /// loser sees the constraint violation, whichever order the inserts land.
    pub async fn create(&self, show: &TvShow) -> Result<(), StoreError> {
        let mut active_model = Self::replacement_fields(show);
        active_model.show_id = Set(show.show_id);

        match TvShows::insert(active_model).exec(&self.conn).await {
            Ok(_) => {}
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(StoreError::AlreadyExists);
            }
            Err(err) => return Err(err.into()),
        }

        info!("Added TV show {}: {}", show.show_id, show.title);
        Ok(())
    }

    /// Pages through the table, clamping `limit` down to the total row count
    /// when it exceeds it. An empty page is an error, not an empty list.
    pub async fn list(&self, mut limit: u64, offset: u64) -> Result<Vec<TvShow>, StoreError> {
        let txn = self.conn.begin().await?;

        let total = TvShows::find().count(&txn).await?;
        if limit > total {
            limit = total;
        }

        let rows = TvShows::find()
            .order_by_asc(tv_shows::Column::ShowId)
            .limit(limit)
            .offset(offset)
            .all(&txn)
            .await?;

        txn.commit().await?;

        if rows.is_empty() {
            return Err(StoreError::NotFound(
                "No TV shows found in the database.".to_string(),
            ));
        }

        Ok(rows.into_iter().map(Self::map_model_to_show).collect())
    }

    pub async fn get(&self, show_id: i32) -> Result<TvShow, StoreError> {
        let row = TvShows::find_by_id(show_id).one(&self.conn).await?;

        row.map(Self::map_model_to_show).ok_or_else(|| {
            StoreError::NotFound(format!("No TV show found with ID {show_id}"))
        })
    }

    /// Exact, case-sensitive genre match. No normalization.
    pub async fn search_by_genre(&self, genre: &str) -> Result<Vec<TvShow>, StoreError> {
        let rows = TvShows::find()
            .filter(tv_shows::Column::Genre.eq(genre))
            .order_by_asc(tv_shows::Column::ShowId)
            .all(&self.conn)
            .await?;

        if rows.is_empty() {
            return Err(StoreError::NotFound(format!(
                "No TV shows found with genre {genre}"
            )));
        }

        Ok(rows.into_iter().map(Self::map_model_to_show).collect())
    }

    /// Replaces every field except `show_id`, which is immutable.
    pub async fn update(&self, show_id: i32, show: &TvShow) -> Result<(), StoreError> {
        let txn = self.conn.begin().await?;

        let existing = TvShows::find_by_id(show_id).one(&txn).await?;
        if existing.is_none() {
            return Err(StoreError::NotFound(format!(
                "Could not update, TV show with ID {show_id} not found"
            )));
        }

        TvShows::update_many()
            .set(Self::replacement_fields(show))
            .filter(tv_shows::Column::ShowId.eq(show_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!("Updated TV show {}", show_id);
        Ok(())
    }

    pub async fn delete(&self, show_id: i32) -> Result<(), StoreError> {
        let result = TvShows::delete_by_id(show_id).exec(&self.conn).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!(
                "No TV show found with ID {show_id}"
            )));
        }

        info!("Removed TV show {}", show_id);
        Ok(())
    }

    /// Unlike the other reads, an empty result here is a valid empty list.
    pub async fn filter(&self, show_id: Option<i32>) -> Result<Vec<TvShow>, StoreError> {
        let mut query = TvShows::find().order_by_asc(tv_shows::Column::ShowId);
        if let Some(id) = show_id {
            query = query.filter(tv_shows::Column::ShowId.eq(id));
        }

        let rows = query.all(&self.conn).await?;
        Ok(rows.into_iter().map(Self::map_model_to_show).collect())
    }
}
