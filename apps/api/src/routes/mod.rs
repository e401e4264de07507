pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::seo::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/dashboard", get(handlers::handle_dashboard))
        .route("/api/citations", get(handlers::handle_citations))
        .route("/api/keywords", get(handlers::handle_keywords))
        .route("/api/recommendations", get(handlers::handle_recommendations))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::seo::models::{BusinessProfile, Citation, CitationStatus, Keyword};
    use crate::seo::store::SeoStore;

    fn app_with(store: SeoStore) -> Router {
        build_router(AppState {
            store: Arc::new(store),
        })
    }

    fn default_app() -> Router {
        app_with(SeoStore::with_defaults().unwrap())
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, content_type, body) = send_get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert!(
            content_type.unwrap_or_default().contains("application/json"),
            "GET {uri} should return JSON"
        );
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let (status, content_type, body) = send_get(default_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("text/html"));
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Local SEO Manager"));
        assert!(html.contains("/api/dashboard"));
    }

    #[tokio::test]
    async fn test_dashboard_default_data() {
        let body = get_json(default_app(), "/api/dashboard").await;
        assert_eq!(body["seo_score"], 64.8);
        assert_eq!(body["citation_count"], 4);
        assert_eq!(body["keyword_count"], 5);
        let avg = body["avg_rank"].as_f64().unwrap();
        assert!((avg - 8.6).abs() < 1e-9, "avg_rank was {avg}");
        assert_eq!(body["business"]["name"], "Example Local Business");
        assert_eq!(body["business"]["hours"]["sunday"], "10:00 AM - 8:00 PM");
    }

    #[tokio::test]
    async fn test_citations_match_store() {
        let body = get_json(default_app(), "/api/citations").await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["platform"], "Google My Business");
        assert_eq!(items[3]["status"], "pending");
        assert_eq!(items[4]["url"], "https://bing.com/places");
    }

    #[tokio::test]
    async fn test_keywords_match_store() {
        let body = get_json(default_app(), "/api/keywords").await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[3]["keyword"], "pizza delivery");
        assert_eq!(items[3]["volume"], 1500);
        assert_eq!(items[3]["difficulty"], 70);
        assert_eq!(items[3]["rank"], 15);
    }

    #[tokio::test]
    async fn test_recommendations_order() {
        let body = get_json(default_app(), "/api/recommendations").await;
        let types: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| (r["type"].as_str().unwrap(), r["priority"].as_str().unwrap()))
            .collect();
        assert_eq!(
            types,
            vec![("Citations", "High"), ("Keywords", "Medium"), ("Reviews", "High")]
        );
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let app = default_app();
        for uri in [
            "/api/dashboard",
            "/api/citations",
            "/api/keywords",
            "/api/recommendations",
        ] {
            let first = get_json(app.clone(), uri).await;
            let second = get_json(app.clone(), uri).await;
            assert_eq!(first, second, "GET {uri} changed between calls");
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let business = SeoStore::with_defaults().unwrap().business().clone();
        let app = app_with(SeoStore::new(business, vec![], vec![]).unwrap());

        let dashboard = get_json(app.clone(), "/api/dashboard").await;
        assert_eq!(dashboard["seo_score"], 30.0);
        assert_eq!(dashboard["citation_count"], 0);
        assert_eq!(dashboard["keyword_count"], 0);
        assert!(dashboard["avg_rank"].is_null());

        assert_eq!(get_json(app.clone(), "/api/citations").await, Value::Array(vec![]));
        assert_eq!(get_json(app.clone(), "/api/keywords").await, Value::Array(vec![]));
        let recs = get_json(app, "/api/recommendations").await;
        assert_eq!(recs.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_store_lengths() {
        let business: BusinessProfile = SeoStore::with_defaults().unwrap().business().clone();
        let citations = vec![Citation {
            platform: "Apple Maps".to_string(),
            status: CitationStatus::Verified,
            url: "https://maps.apple.com".to_string(),
        }];
        let keywords = (1..=3)
            .map(|i| Keyword {
                keyword: format!("phrase {i}"),
                volume: 100 * i,
                difficulty: 10,
                rank: 20,
            })
            .collect();
        let app = app_with(SeoStore::new(business, citations, keywords).unwrap());

        let citations = get_json(app.clone(), "/api/citations").await;
        assert_eq!(citations.as_array().unwrap().len(), 1);
        let keywords = get_json(app.clone(), "/api/keywords").await;
        assert_eq!(keywords.as_array().unwrap().len(), 3);

        // 30 citation + 0 ranking + 30 info
        let dashboard = get_json(app, "/api/dashboard").await;
        assert_eq!(dashboard["seo_score"], 60.0);
    }

    #[tokio::test]
    async fn test_health() {
        let body = get_json(default_app(), "/health").await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_json() {
        let (status, _, body) = send_get(default_app(), "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_post_is_method_not_allowed() {
        let response = default_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/citations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
