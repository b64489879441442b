use serde::{Deserialize, Serialize};

/// A single catalog entry: one movie or TV show.
///
/// All fields are required. `date_added` and `duration` are kept as opaque
/// text ("2022-01-01", "90 min", "3 Seasons") and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvShow {
    pub show_id: i32,
    pub show_type: String,
    pub genre: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub release_year: i32,
    pub rating: String,
    pub duration: String,
}
