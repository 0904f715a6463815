use std::convert::Infallible;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Json;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::info;

use tally_ledger::{LedgerReader, LedgerWriter, NoticeFilter};
use tally_types::Timestamp;

use crate::error::ServerResult;
use crate::extract::caller_identity;
use crate::state::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InteractResponse {
    pub index: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimestampsResponse {
    pub timestamps: Vec<u64>,
}

/// `latest` response.
///
/// `empty` disambiguates the sentinel `(zero identity, 0)` from a genuine
/// zero-valued entry, sparing remote callers the second `total` round-trip.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatestResponse {
    pub user: String,
    pub timestamp: u64,
    pub empty: bool,
}

/// Record one interaction for the caller named in the identity header,
/// stamped with the server's wall clock.
pub async fn interact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ServerResult<Json<InteractResponse>> {
    let user = caller_identity(&headers, &state.config().identity_header)?;
    let index = state.ledger().record(user, Timestamp::now());
    info!(user = %user, index, "interaction accepted");
    Ok(Json(InteractResponse { index }))
}

pub async fn total_handler(State(state): State<AppState>) -> Json<TotalResponse> {
    Json(TotalResponse {
        total: state.ledger().total(),
    })
}

pub async fn users_handler(State(state): State<AppState>) -> Json<UsersResponse> {
    let users = state
        .ledger()
        .all_users()
        .iter()
        .map(|u| u.to_hex())
        .collect();
    Json(UsersResponse { users })
}

pub async fn timestamps_handler(State(state): State<AppState>) -> Json<TimestampsResponse> {
    let timestamps = state
        .ledger()
        .all_timestamps()
        .iter()
        .map(|t| t.as_millis())
        .collect();
    Json(TimestampsResponse { timestamps })
}

pub async fn latest_handler(State(state): State<AppState>) -> Json<LatestResponse> {
    let empty = state.ledger().total() == 0;
    let (user, timestamp) = state.ledger().latest();
    Json(LatestResponse {
        user: user.to_hex(),
        timestamp: timestamp.as_millis(),
        empty,
    })
}

/// Live notification stream: one SSE event per successful interact, in
/// append order. Lagged subscribers skip ahead rather than stall the hub.
pub async fn stream_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.hub().subscribe(NoticeFilter::default());
    let stream = futures::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(notice) => {
                    let event = match Event::default().event("interaction").json_data(notice) {
                        Ok(event) => event,
                        Err(_) => continue,
                    };
                    return Some((Ok::<_, Infallible>(event), rx));
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "tally-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
