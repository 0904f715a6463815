use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Tally endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/interact", post(handler::interact_handler))
        .route("/v1/interactions/total", get(handler::total_handler))
        .route("/v1/interactions/users", get(handler::users_handler))
        .route(
            "/v1/interactions/timestamps",
            get(handler::timestamps_handler),
        )
        .route("/v1/interactions/latest", get(handler::latest_handler))
        .route("/v1/interactions/stream", get(handler::stream_handler))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use tally_types::AccountId;

    use crate::config::ServerConfig;
    use crate::handler::{LatestResponse, TotalResponse, UsersResponse};

    use super::*;

    const BODY_LIMIT: usize = 64 * 1024;

    fn state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    fn interact_request(id: &AccountId) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/interact")
            .header("x-tally-caller", id.to_hex())
            .body(Body::empty())
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = build_router(state())
            .oneshot(get_request("/v1/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn interact_assigns_sequential_indices() {
        let app = build_router(state());
        let alice = AccountId::from_bytes([1; 20]);

        for expected in 0..3u64 {
            let response = app
                .clone()
                .oneshot(interact_request(&alice))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = json_body(response).await;
            assert_eq!(body["index"], expected);
        }
    }

    #[tokio::test]
    async fn interact_without_identity_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/interact")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn interact_with_malformed_identity_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/interact")
            .header("x-tally-caller", "deadbeef")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn read_views_reflect_appends() {
        let app = build_router(state());
        let alice = AccountId::from_bytes([1; 20]);
        let bob = AccountId::from_bytes([2; 20]);

        for id in [&alice, &bob, &alice] {
            app.clone().oneshot(interact_request(id)).await.unwrap();
        }

        let total: TotalResponse =
            json_body(app.clone().oneshot(get_request("/v1/interactions/total")).await.unwrap())
                .await;
        assert_eq!(total.total, 3);

        let users: UsersResponse =
            json_body(app.clone().oneshot(get_request("/v1/interactions/users")).await.unwrap())
                .await;
        assert_eq!(
            users.users,
            vec![alice.to_hex(), bob.to_hex(), alice.to_hex()]
        );

        let latest: LatestResponse =
            json_body(app.oneshot(get_request("/v1/interactions/latest")).await.unwrap()).await;
        assert_eq!(latest.user, alice.to_hex());
        assert!(!latest.empty);
    }

    #[tokio::test]
    async fn latest_on_empty_ledger_reports_sentinel() {
        let response = build_router(state())
            .oneshot(get_request("/v1/interactions/latest"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let latest: LatestResponse = json_body(response).await;
        assert_eq!(latest.user, AccountId::zero().to_hex());
        assert_eq!(latest.timestamp, 0);
        assert!(latest.empty);
    }

    #[tokio::test]
    async fn timestamps_match_total() {
        let app = build_router(state());
        let alice = AccountId::from_bytes([1; 20]);
        app.clone().oneshot(interact_request(&alice)).await.unwrap();

        let body: Value =
            json_body(app.oneshot(get_request("/v1/interactions/timestamps")).await.unwrap())
                .await;
        assert_eq!(body["timestamps"].as_array().unwrap().len(), 1);
        assert!(body["timestamps"][0].as_u64().unwrap() > 0);
    }
}
