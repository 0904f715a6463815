use std::sync::Arc;

use tally_ledger::{InMemoryLedger, NoticeHub};

use crate::config::ServerConfig;

/// Shared state handed to every handler.
///
/// The ledger emits into the hub; the hub fans out to SSE subscribers. Both
/// live for the whole process, matching the ledger's single lifecycle phase.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    ledger: InMemoryLedger,
    hub: Arc<NoticeHub>,
    config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let hub = Arc::new(NoticeHub::new(config.channel_capacity));
        let ledger = InMemoryLedger::with_sink(hub.clone());
        Self {
            inner: Arc::new(Shared {
                ledger,
                hub,
                config,
            }),
        }
    }

    pub fn ledger(&self) -> &InMemoryLedger {
        &self.inner.ledger
    }

    pub fn hub(&self) -> &NoticeHub {
        &self.inner.hub
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
