mod common;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use fi_core::Error;
use fi_inference::{Config, RecommendationClient, RecommendationSource};
use serde_json::{json, Value};

use common::{spawn_backend, unreachable_backend};

async fn recommendations(State(users): State<Arc<Mutex<Vec<String>>>>, Path(user): Path<String>) -> Json<Value> {
    users.lock().unwrap().push(user);
    Json(json!([
        { "id": 4, "title": "Recommended: Python 3.12 Features", "category": "Technology", "reason": "Based on your reading history" },
        { "id": 9, "title": "Central Banks Hold Rates", "category": "Business", "reason": "Trending in Finance", "image": "🏦" }
    ]))
}

fn client(base_url: &str) -> RecommendationClient {
    RecommendationClient::new(&Config::new(base_url).unwrap()).unwrap()
}

#[tokio::test]
async fn test_server_items_come_before_supplemental() {
    let users = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/recommendations/:user", get(recommendations))
        .with_state(users.clone());
    let url = spawn_backend(app).await;

    let items = client(&url).fetch_recommendations("user1").await;

    let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![4, 9, 101, 102, 103, 104]);
    assert!(items[0].image.is_empty());
    assert_eq!(items[1].image, "🏦");
    assert_eq!(*users.lock().unwrap(), vec!["user1".to_string()]);
}

#[tokio::test]
async fn test_failed_fetch_yields_nothing() {
    let app = Router::new().route(
        "/recommendations/:user",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_backend(app).await;
    let client = client(&url);

    assert!(client.fetch_recommendations("user1").await.is_empty());
    assert!(matches!(
        client.try_fetch_recommendations("user1").await,
        Err(Error::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_malformed_payload_yields_nothing() {
    let app = Router::new().route(
        "/recommendations/:user",
        get(|| async { Json(json!({ "not": "an array" })) }),
    );
    let url = spawn_backend(app).await;

    assert!(client(&url).fetch_recommendations("user1").await.is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_yields_nothing() {
    let url = unreachable_backend().await;
    assert!(client(&url).fetch_recommendations("user1").await.is_empty());
}
