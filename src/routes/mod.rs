//! Route modules for the thumbnail server

mod extract;
pub mod health;
pub mod thumbnails;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/health", health::router())
        .nest("/api/v1/thumbnails", thumbnails::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::{NamedTempFile, TempDir};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::document::testing::FakeBackend;
    use crate::document::PageSize;
    use crate::thumbnail::{ThumbnailService, ThumbnailWriter};

    struct TestApp {
        router: Router,
        source: NamedTempFile,
        _output: TempDir,
    }

    fn test_app() -> TestApp {
        let output = TempDir::new().unwrap();
        let backend = FakeBackend::new(vec![
            PageSize::new(612.0, 792.0),
            PageSize::new(612.0, 792.0),
        ]);
        let service = ThumbnailService::new(
            Arc::new(backend),
            ThumbnailWriter::new(output.path(), 80),
        );

        TestApp {
            router: app(AppState::new(Config::default(), service)),
            source: NamedTempFile::new().unwrap(),
            _output: output,
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app.router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["jpeg_quality"], 80);
    }

    #[tokio::test]
    async fn test_generate_endpoint() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": locator, "page": 0 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["width"], 612);
        assert_eq!(body["height"], 792);
        assert!(body["uri"].as_str().unwrap().starts_with("file://"));
    }

    #[tokio::test]
    async fn test_generate_with_min_side_endpoint() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": locator, "page": 1, "minSide": 1000 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["width"], 1000);
        assert_eq!(body["height"], 1294);
    }

    #[tokio::test]
    async fn test_generate_all_endpoint() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails/all",
            json!({ "locator": locator }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_page_error_body() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": locator, "page": 5 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PAGE");
        assert_eq!(body["message"], "Page number 5 is invalid, file has 2 pages");
    }

    #[tokio::test]
    async fn test_missing_file_error_body() {
        let app = test_app();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": "/missing.pdf", "page": 0 }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "FILE_NOT_FOUND");
        assert_eq!(body["message"], "File /missing.pdf not found");
    }

    #[tokio::test]
    async fn test_missing_field_error_body() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": locator }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("page"));
    }

    #[tokio::test]
    async fn test_mistyped_min_side_error_body() {
        let app = test_app();
        let locator = app.source.path().to_str().unwrap().to_string();

        let (status, body) = post_json(
            app.router.clone(),
            "/api/v1/thumbnails",
            json!({ "locator": locator, "page": 0, "minSide": "large" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_malformed_json_error_body() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/thumbnails/all")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"locator\":"))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_REQUEST");
    }
}
