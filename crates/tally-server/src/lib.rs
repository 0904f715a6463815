//! HTTP server for the Tally interaction ledger.
//!
//! Exposes the ledger's five operations over a versioned REST API plus a
//! server-sent-events stream of interaction notices. Caller identity comes
//! from a trusted request header set by the fronting layer; the timestamp is
//! read from the server's wall clock at append time.

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;
pub use state::AppState;
