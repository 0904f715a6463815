use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use tally_types::{AccountId, Timestamp};

/// Outbound notification emitted once per successful append.
///
/// Carries exactly the tuple observable by external indexers and monitors:
/// who interacted, when, and which index the ledger assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionNotice {
    pub user: AccountId,
    pub timestamp: Timestamp,
    pub index: u64,
}

impl fmt::Display for InteractionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice #{} {} @{}", self.index, self.user, self.timestamp)
    }
}

/// Outbound side of the notification layer.
///
/// The ledger emits into a sink without knowing who (if anyone) consumes
/// the notices. Delivery is fire-and-forget: a sink must never block or
/// fail the append that triggered it.
pub trait InteractionSink: Send + Sync {
    fn notify(&self, notice: &InteractionNotice);
}

/// Sink that discards every notice. Default for embedded and test use.
pub struct NoopSink;

impl InteractionSink for NoopSink {
    fn notify(&self, _notice: &InteractionNotice) {}
}

/// Filter for subscribing to a subset of notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeFilter {
    /// If set, only notices for these identities are delivered.
    pub users: Option<Vec<AccountId>>,
    /// If set, only notices with timestamps strictly after this are delivered.
    pub since: Option<Timestamp>,
}

impl NoticeFilter {
    /// Returns `true` if the given notice matches this filter.
    pub fn matches(&self, notice: &InteractionNotice) -> bool {
        if let Some(ref users) = self.users {
            if !users.contains(&notice.user) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if notice.timestamp <= since {
                return false;
            }
        }
        true
    }
}

/// A broadcast channel receiver for interaction notices.
pub type NoticeStream = broadcast::Receiver<InteractionNotice>;

/// Internal subscriber: a filter paired with a broadcast sender.
struct Subscriber {
    filter: NoticeFilter,
    sender: broadcast::Sender<InteractionNotice>,
}

/// Fan-out hub that delivers notices to matching subscribers.
///
/// Subscribers receive notices in append order. A lagging subscriber loses
/// old notices (bounded channel); a closed subscriber is pruned on the next
/// route. Neither condition ever affects the append that emitted the notice.
pub struct NoticeHub {
    subscribers: RwLock<Vec<Subscriber>>,
    default_capacity: usize,
}

impl NoticeHub {
    pub fn new(default_capacity: usize) -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            default_capacity,
        }
    }

    /// Register a subscriber with the given filter.
    /// Returns a broadcast receiver for the matching notices.
    pub fn subscribe(&self, filter: NoticeFilter) -> NoticeStream {
        self.subscribe_with_capacity(filter, self.default_capacity)
    }

    /// Register a subscriber with an explicit channel capacity.
    pub fn subscribe_with_capacity(&self, filter: NoticeFilter, capacity: usize) -> NoticeStream {
        let (tx, rx) = broadcast::channel(capacity);
        let sub = Subscriber { filter, sender: tx };
        self.subscribers
            .write()
            .expect("hub lock poisoned")
            .push(sub);
        rx
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().expect("hub lock poisoned").len()
    }
}

impl Default for NoticeHub {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl InteractionSink for NoticeHub {
    fn notify(&self, notice: &InteractionNotice) {
        let mut subs = self.subscribers.write().expect("hub lock poisoned");
        subs.retain(|sub| {
            if sub.filter.matches(notice) {
                // If send fails (no receivers), the subscriber is stale.
                sub.sender.send(*notice).is_ok()
            } else {
                // Keep non-matching subscribers; they may match future
                // notices. Only prune if the channel itself is closed.
                sub.sender.receiver_count() > 0
            }
        });
        debug!(index = notice.index, subscribers = subs.len(), "notice routed");
    }
}
