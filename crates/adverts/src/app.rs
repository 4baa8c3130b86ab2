use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        adverts::{confirm_advert, create_advert, get_advert, list_adverts},
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/adverts", get(list_adverts).post(create_advert))
        .route("/adverts/confirm", put(confirm_advert))
        .route("/adverts/{id}", get(get_advert))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, title: &str) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/adverts",
                serde_json::json!({ "title": title, "price": 10.0 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_adverts_empty() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/api/adverts")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_advert() {
        let app = create_app(AppState::default());
        let id = create(&app, "Car").await;

        let response = app
            .oneshot(get_request(&format!("/api/adverts/{id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let advert = body_json(response).await;
        assert_eq!(advert["id"], id.as_str());
        assert_eq!(advert["status"], "Pending");
        assert_eq!(advert["title"], "Car");
        assert!(advert["filePath"].is_null());
    }

    #[tokio::test]
    async fn test_create_advert_rejects_blank_title() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/adverts",
                serde_json::json!({ "title": "  " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_nonexistent_advert() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request("/api/adverts/never-created"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_confirm_accept() {
        let app = create_app(AppState::default());
        let id = create(&app, "Car").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/adverts/confirm",
                serde_json::json!({ "id": id, "status": "Active", "filePath": "/files/x.jpg" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/api/adverts/{id}")))
            .await
            .unwrap();
        let advert = body_json(response).await;
        assert_eq!(advert["status"], "Active");
        assert_eq!(advert["filePath"], "/files/x.jpg");
        assert_eq!(advert["title"], "Car");
    }

    #[tokio::test]
    async fn test_confirm_reject_removes_advert() {
        let app = create_app(AppState::default());
        let id = create(&app, "Bike").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/adverts/confirm",
                serde_json::json!({ "id": id, "status": "Rejected" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/api/adverts/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_confirm_accept_requires_file_path() {
        let app = create_app(AppState::default());
        let id = create(&app, "Car").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/adverts/confirm",
                serde_json::json!({ "id": id, "status": "Active" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(get_request(&format!("/api/adverts/{id}")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["status"], "Pending");
    }

    #[tokio::test]
    async fn test_reject_after_accept_keeps_advert() {
        let app = create_app(AppState::default());
        let id = create(&app, "Car").await;

        for body in [
            serde_json::json!({ "id": id, "status": "Active", "filePath": "/files/x.jpg" }),
            serde_json::json!({ "id": id, "status": "Rejected" }),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("PUT", "/api/adverts/confirm", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(get_request(&format!("/api/adverts/{id}")))
            .await
            .unwrap();
        let advert = body_json(response).await;
        assert_eq!(advert["status"], "Active");
        assert_eq!(advert["filePath"], "/files/x.jpg");
    }

    #[tokio::test]
    async fn test_create_advert_rejects_unstorable_price() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/adverts",
                serde_json::json!({ "title": "Car", "price": 1e200 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_confirm_nonexistent_advert() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/adverts/confirm",
                serde_json::json!({ "id": "missing", "status": "Rejected" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_adverts_returns_all_created() {
        let app = create_app(AppState::default());
        let car = create(&app, "Car").await;
        let boat = create(&app, "Boat").await;

        let response = app.oneshot(get_request("/api/adverts")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let ids: HashSet<String> = body_json(response)
            .await
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, HashSet::from([car, boat]));
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let repo = InMemoryRepository::new();
        let app = create_app(AppState::new(Arc::new(repo.clone())));

        let response = app.clone().oneshot(get_request("/livez")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get_request("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["healthy"], true);

        repo.set_available(false);

        let response = app.clone().oneshot(get_request("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["healthy"], false);

        let response = app.oneshot(get_request("/livez")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_storage_unavailable_maps_to_503() {
        let repo = InMemoryRepository::new();
        repo.set_available(false);
        let app = create_app(AppState::new(Arc::new(repo)));

        let response = app.oneshot(get_request("/api/adverts")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
