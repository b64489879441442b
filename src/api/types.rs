use serde::{Deserialize, Serialize};

/// Wire representation of a catalog record. The same shape is used for
/// request and response bodies; no field is write-only or read-only.
///
/// Every field is mandatory: a missing or mistyped field fails
/// deserialization before the request reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowDto {
    pub show_id: i32,
    #[serde(rename = "type")]
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

/// Body of every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
