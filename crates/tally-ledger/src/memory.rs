use std::sync::{Arc, RwLock};

use tracing::debug;

use tally_types::{AccountId, Interaction, Timestamp};

use crate::notify::{InteractionNotice, InteractionSink, NoopSink};
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory ledger implementation.
///
/// The backing sequence lives behind a single `RwLock`. `record` takes the
/// write lock around "read length, construct, push, notify" as one atomic
/// unit, so index assignment never races and two concurrent appends never
/// receive the same index. Reads take the read lock and may run concurrently;
/// none can observe a partially appended interaction.
///
/// A poisoned lock means another append panicked mid-write; that is an
/// environment failure and surfaces unmodified as a panic rather than a
/// ledger error kind.
pub struct InMemoryLedger {
    entries: RwLock<Vec<Interaction>>,
    sink: Arc<dyn InteractionSink>,
}

impl InMemoryLedger {
    /// Create an empty ledger that discards notifications.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopSink))
    }

    /// Create an empty ledger that emits one notice per append into `sink`.
    pub fn with_sink(sink: Arc<dyn InteractionSink>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            sink,
        }
    }

    /// Owned snapshot of the full sequence, in append order.
    pub fn entries(&self) -> Vec<Interaction> {
        self.entries.read().expect("ledger lock poisoned").clone()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn record(&self, user: AccountId, timestamp: Timestamp) -> u64 {
        let mut entries = self.entries.write().expect("ledger lock poisoned");
        let index = entries.len() as u64;
        entries.push(Interaction::new(user, timestamp, index));

        // Emitted inside the write lock so notice order equals index order.
        self.sink.notify(&InteractionNotice {
            user,
            timestamp,
            index,
        });

        debug!(user = %user, timestamp = %timestamp, index, "interaction recorded");
        index
    }
}

impl LedgerReader for InMemoryLedger {
    fn total(&self) -> u64 {
        self.entries.read().expect("ledger lock poisoned").len() as u64
    }

    fn all_users(&self) -> Vec<AccountId> {
        self.entries
            .read()
            .expect("ledger lock poisoned")
            .iter()
            .map(|e| e.user)
            .collect()
    }

    fn all_timestamps(&self) -> Vec<Timestamp> {
        self.entries
            .read()
            .expect("ledger lock poisoned")
            .iter()
            .map(|e| e.timestamp)
            .collect()
    }

    fn latest(&self) -> (AccountId, Timestamp) {
        self.entries
            .read()
            .expect("ledger lock poisoned")
            .last()
            .map(|e| (e.user, e.timestamp))
            .unwrap_or((AccountId::zero(), Timestamp::zero()))
    }
}
