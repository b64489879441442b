use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, types::TvShowDto};
use crate::api::validation::validate_page;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

const fn default_limit() -> i64 {
    10
}

pub async fn create_tvshow(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TvShowDto>,
) -> Result<(), ApiError> {
    state.catalog().create_show(payload).await?;
    Ok(())
}

pub async fn list_tvshows(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<TvShowDto>>, ApiError> {
    let (limit, offset) = validate_page(page.limit, page.offset)?;
    let shows = state.catalog().list_shows(limit, offset).await?;
    Ok(Json(shows))
}

pub async fn get_tvshow(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<i32>,
) -> Result<Json<TvShowDto>, ApiError> {
    let show = state.catalog().get_show(show_id).await?;
    Ok(Json(show))
}

pub async fn search_tvshows_by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> Result<Json<Vec<TvShowDto>>, ApiError> {
    let shows = state.catalog().search_by_genre(&genre).await?;
    Ok(Json(shows))
}

pub async fn update_tvshow(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<i32>,
    Json(payload): Json<TvShowDto>,
) -> Result<(), ApiError> {
    state.catalog().update_show(show_id, payload).await?;
    Ok(())
}

pub async fn delete_tvshow(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<i32>,
) -> Result<(), ApiError> {
    state.catalog().delete_show(show_id).await?;
    Ok(())
}
