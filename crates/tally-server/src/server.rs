use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Tally ledger server.
pub struct TallyServer {
    state: AppState,
}

impl TallyServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        self.state.config()
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let bind_addr = self.state.config().bind_addr;
        let app = build_router(self.state);
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("tally server listening on {bind_addr}");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
