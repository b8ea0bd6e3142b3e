// src/server/routes.rs
//! Axum router configuration for the kuchnia server

use crate::server::handlers::{categories, recipes};
use crate::server::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: Arc<RwLock<ServerState>>) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Category list
        .route("/recipes", get(categories::list_categories))
        // Category detail with submission form
        .route("/recipes/:category_id", get(categories::show_category))
        // New recipe submission
        .route("/recipes/:category_id/new", post(recipes::submit_recipe))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = ServerConfig::default();
        let state = Arc::new(RwLock::new(ServerState::new(config)));
        create_router(state)
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let response = app()
            .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Dania główne"));
        assert!(body.contains("Desery"));
    }

    #[tokio::test]
    async fn test_show_category() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/recipes/desery")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Szarlotka"));
    }

    #[tokio::test]
    async fn test_show_unknown_category_returns_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/recipes/zupy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_to_unknown_category_returns_404() {
        let response = app()
            .oneshot(form_post("/recipes/zupy/new", "title=Rosol"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_valid_recipe_redirects() {
        let app = app();

        let response = app
            .clone()
            .oneshot(form_post(
                "/recipes/desery/new",
                "title=Sernik&ingredients=ser%0Acukier&instructions=Upiecz.&cook_time_min=60&servings=8",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/recipes/desery"
        );

        // The appended recipe shows up after the seed recipe
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes/desery")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_string(response).await;
        let seed = body.find("Szarlotka").unwrap();
        let added = body.find("Sernik").unwrap();
        assert!(seed < added);
    }

    #[tokio::test]
    async fn test_submit_invalid_recipe_rerenders_with_errors() {
        let response = app()
            .oneshot(form_post(
                "/recipes/desery/new",
                "title=&ingredients=&instructions=&cook_time_min=-1&servings=0",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("Brak tytułu przepisu"));
        assert!(body.contains("Brak instrukcji przygotowania"));
        assert!(body.contains("Czas przygotowania musi być nieujemną liczbą całkowitą"));
        assert!(body.contains("Porcje muszą być dodatnią liczbą całkowitą"));
    }

    #[tokio::test]
    async fn test_submit_invalid_recipe_prefills_raw_values() {
        let response = app()
            .oneshot(form_post(
                "/recipes/desery/new",
                "title=Sernik&ingredients=ser%0A%0Acukier%20%0A&instructions=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        // Raw textarea content comes back untouched, not the split lines
        assert!(body.contains("Sernik"));
        assert!(body.contains("ser\n\ncukier"));
    }
}
