mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{spawn_app, spawn_app_with};
use serde_json::json;
use songbook::{AppConfig, PlaylistService, Song, SongService};
use tower::ServiceExt;

#[tokio::test]
async fn health_ready_version() {
    let app = spawn_app().await;

    let res = app.get("/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Some(json!({"status": "ok"})));

    let res = app.get("/ready").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Some(json!({"status": "ok", "database": "ok"})));

    let res = app.get("/version").await;
    assert_eq!(res.body.unwrap()["name"], "songbook");
}

#[tokio::test]
async fn ready_reports_closed_store() {
    let app = spawn_app().await;
    app.pool.close().await;

    let res = app.get("/ready").await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.body.unwrap()["database"], "unavailable");
}

#[tokio::test]
async fn openapi_lists_routes() {
    let app = spawn_app().await;
    let res = app.get("/openapi.json").await;
    assert_eq!(res.status, StatusCode::OK);
    let doc = res.body.unwrap();
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/songs",
        "/songs/{id}",
        "/playlists",
        "/playlists/{id}",
        "/playlists/{playlist_id}/songs/{song_id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(doc["components"]["schemas"]["Song"].is_object());
}

#[tokio::test]
async fn in_memory_store_keeps_data_across_checkouts() {
    let app = spawn_app().await;
    app.post("/songs", json!({"id": 1, "name": "Kept", "artist": "A"})).await;

    for _ in 0..5 {
        let mut conn = app.pool.acquire().await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Songs").fetch_one(&mut *conn).await.unwrap();
        assert_eq!(count, 1);
    }
    assert_eq!(app.get("/songs/1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn file_store_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songbook.db");
    let config = AppConfig {
        database_url: format!("sqlite://{}", path.display()),
        ..AppConfig::default()
    };

    let app = spawn_app_with(config.clone()).await;
    app.post("/songs", json!({"id": 1, "name": "On disk", "artist": "A"})).await;
    app.post("/playlists", json!({"id": 1, "name": "P", "songs": [1, 2]})).await;
    app.pool.close().await;

    let app = spawn_app_with(config).await;
    assert_eq!(app.get("/songs/1").await.body.unwrap()["name"], "On disk");
    assert_eq!(app.get("/playlists/1").await.body.unwrap()["songs"], json!([1, 2]));
}

#[tokio::test]
async fn body_limit_is_enforced() {
    let config = AppConfig {
        body_limit_bytes: 64,
        ..AppConfig::default()
    };
    let app = spawn_app_with(config).await;
    let res = app
        .post("/songs", json!({"id": 1, "name": "x".repeat(200), "artist": "A"}))
        .await;
    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.body.unwrap()["error"]["code"], "payload_too_large");

    let raw = serde_json::to_vec(&json!({"id": 2, "name": "y".repeat(200), "artist": "B"})).unwrap();
    let len = raw.len();
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/songs")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, len)
                .body(Body::from(raw))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn malformed_bodies_use_error_envelope() {
    let app = spawn_app().await;

    let res = app
        .request_raw(Method::POST, "/songs", Some("application/json"), "{\"id\": 1, \"name\":")
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body.unwrap()["error"]["code"], "bad_request");

    let res = app
        .request_raw(Method::POST, "/playlists", None, r#"{"id": 1, "name": "P"}"#)
        .await;
    assert_eq!(res.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(res.body.unwrap()["error"]["code"], "unsupported_media_type");

    let res = app
        .request_raw(Method::PUT, "/songs/1", Some("text/plain"), "name=x")
        .await;
    assert_eq!(res.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(res.body.unwrap()["error"]["code"], "unsupported_media_type");

    assert_eq!(app.get("/songs").await.body, Some(json!([])));
    assert_eq!(app.get("/playlists").await.body, Some(json!([])));
}

#[tokio::test]
async fn services_work_without_http() {
    let app = spawn_app().await;
    let song = Song { id: 10, name: "Direct".into(), artist: "Caller".into() };
    assert_eq!(SongService::create(&app.pool, &song).await.unwrap(), song);
    assert_eq!(SongService::read(&app.pool, 10).await.unwrap(), Some(song));
    assert!(SongService::delete(&app.pool, 10).await.unwrap());
    assert!(!SongService::delete(&app.pool, 10).await.unwrap());
    assert!(PlaylistService::list(&app.pool).await.unwrap().is_empty());
}
