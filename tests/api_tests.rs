//! Full-stack tests for the /tvshow HTTP surface.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use showarr::config::Config;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path = std::env::temp_dir().join(format!("showarr-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = showarr::api::create_app_state_from_config(config)
        .await
        .expect("failed to create app state");
    showarr::api::router(state).await
}

fn sample_show(show_id: i32, genre: &str) -> Value {
    json!({
        "show_id": show_id,
        "type": "Movie",
        "genre": genre,
        "title": format!("Title {show_id}"),
        "director": "Director",
        "cast": "Actor One, Actor Two",
        "country": "US",
        "date_added": "2022-01-01",
        "release_year": 2022,
        "rating": "PG",
        "duration": "90 min"
    })
}

async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // Extractor rejections (e.g. a missing field) come back as plain text.
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

#[tokio::test]
async fn create_then_get_returns_record() {
    let app = spawn_app().await;

    let show = sample_show(1, "Drama");
    let (status, body) = send_json(&app, Method::POST, "/tvshow/create", &show).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, show);
}

#[tokio::test]
async fn duplicate_create_returns_conflict() {
    let app = spawn_app().await;

    let show = sample_show(7, "Drama");
    let (status, _) = send_json(&app, Method::POST, "/tvshow/create", &show).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, Method::POST, "/tvshow/create", &show).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "A TV show with this ID already exists.");
}

#[tokio::test]
async fn list_clamps_limit_to_row_count() {
    let app = spawn_app().await;

    for id in 1..=3 {
        let (status, _) =
            send_json(&app, Method::POST, "/tvshow/create", &sample_show(id, "Drama")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/tvshow/all?limit=100&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_pagination_with_offset() {
    let app = spawn_app().await;

    for id in 1..=5 {
        let (status, _) =
            send_json(&app, Method::POST, "/tvshow/create", &sample_show(id, "Drama")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/tvshow/all?limit=2&offset=2").await;
    assert_eq!(status, StatusCode::OK);

    let page: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["show_id"].as_i64().unwrap())
        .collect();
    assert_eq!(page, vec![3, 4]);
}

#[tokio::test]
async fn list_defaults_to_ten_rows() {
    let app = spawn_app().await;

    for id in 1..=12 {
        let (status, _) =
            send_json(&app, Method::POST, "/tvshow/create", &sample_show(id, "Drama")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/tvshow/all").await;
    assert_eq!(status, StatusCode::OK);

    let page: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["show_id"].as_i64().unwrap())
        .collect();
    assert_eq!(page, (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn list_on_empty_table_returns_not_found() {
    let app = spawn_app().await;

    let (status, body) = send(&app, Method::GET, "/tvshow/all").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No TV shows found in the database.");
}

#[tokio::test]
async fn list_rejects_negative_page_params() {
    let app = spawn_app().await;

    let (status, _) = send(&app, Method::GET, "/tvshow/all?limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/tvshow/all?offset=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn genre_search_is_exact_and_case_sensitive() {
    let app = spawn_app().await;

    let (status, _) =
        send_json(&app, Method::POST, "/tvshow/create", &sample_show(1, "Drama")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) =
        send_json(&app, Method::POST, "/tvshow/create", &sample_show(2, "drama")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/tvshow/genre/Drama").await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["show_id"], 1);

    let (status, body) = send(&app, Method::GET, "/tvshow/genre/Comedy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No TV shows found with genre Comedy");
}

#[tokio::test]
async fn update_replaces_all_fields_and_ignores_body_id() {
    let app = spawn_app().await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/tvshow/update/42",
        &sample_show(42, "Drama"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Could not update, TV show with ID 42 not found");

    let (status, _) =
        send_json(&app, Method::POST, "/tvshow/create", &sample_show(1, "Drama")).await;
    assert_eq!(status, StatusCode::OK);

    // Body carries a different show_id; the path parameter wins.
    let mut replacement = sample_show(999, "Comedy");
    replacement["title"] = json!("Replaced");
    replacement["release_year"] = json!(1999);

    let (status, _) = send_json(&app, Method::PUT, "/tvshow/update/1", &replacement).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["show_id"], 1);
    assert_eq!(body["genre"], "Comedy");
    assert_eq!(body["title"], "Replaced");
    assert_eq!(body["release_year"], 1999);

    let (status, _) = send(&app, Method::GET, "/tvshow/detail/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_lifecycle() {
    let app = spawn_app().await;

    let (status, body) = send(&app, Method::DELETE, "/tvshow/delete/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No TV show found with ID 1");

    let (status, _) =
        send_json(&app, Method::POST, "/tvshow/create", &sample_show(1, "Drama")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/tvshow/delete/1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/tvshow/delete/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = spawn_app().await;

    let mut incomplete = sample_show(1, "Drama");
    incomplete.as_object_mut().unwrap().remove("director");

    let (status, _) = send_json(&app, Method::POST, "/tvshow/create", &incomplete).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was stored.
    let (status, _) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_catalog_scenario() {
    let app = spawn_app().await;

    let show = json!({
        "show_id": 1,
        "type": "Movie",
        "genre": "Drama",
        "title": "X",
        "director": "D",
        "cast": "C",
        "country": "US",
        "date_added": "2022-01-01",
        "release_year": 2022,
        "rating": "PG",
        "duration": "90 min"
    });

    let (status, _) = send_json(&app, Method::POST, "/tvshow/create", &show).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, show);

    let mut updated = show.clone();
    updated["genre"] = json!("Comedy");
    let (status, _) = send_json(&app, Method::PUT, "/tvshow/update/1", &updated).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/tvshow/genre/Comedy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/tvshow/genre/Drama").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/tvshow/delete/1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/tvshow/detail/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
