use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::AccountId;
use crate::temporal::Timestamp;

/// A single immutable ledger record.
///
/// Constructed once at append time and never mutated afterward. The `index`
/// is the zero-based position assigned by the ledger, equal to the ledger
/// length immediately before the append — so the k-th appended interaction
/// always carries `index == k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Identity of the caller, as supplied by the execution context.
    pub user: AccountId,
    /// Time value supplied by the environment at the moment of append.
    pub timestamp: Timestamp,
    /// Zero-based position in the ledger.
    pub index: u64,
}

impl Interaction {
    pub fn new(user: AccountId, timestamp: Timestamp, index: u64) -> Self {
        Self {
            user,
            timestamp,
            index,
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} @{}", self.index, self.user, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_fields() {
        let user = AccountId::from_bytes([3; 20]);
        let record = Interaction::new(user, Timestamp::new(100), 7);
        assert_eq!(record.user, user);
        assert_eq!(record.timestamp, Timestamp::new(100));
        assert_eq!(record.index, 7);
    }

    #[test]
    fn serde_roundtrip() {
        let record = Interaction::new(AccountId::ephemeral(), Timestamp::new(5), 0);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Interaction = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn display_includes_index_and_timestamp() {
        let record = Interaction::new(AccountId::zero(), Timestamp::new(9), 2);
        let s = record.to_string();
        assert!(s.starts_with("#2 "));
        assert!(s.ends_with("@9"));
    }
}
