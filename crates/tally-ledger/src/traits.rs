use tally_types::{AccountId, Timestamp};

/// Write boundary for ledger append operations.
///
/// Appending is unconditional: there are no caller-supplied parameters to
/// validate (identity and time come from the trusted execution context), so
/// `record` returns the assigned index directly rather than a `Result`.
pub trait LedgerWriter: Send + Sync {
    /// Append one interaction and return its zero-based index.
    ///
    /// The index equals the ledger length immediately before the append.
    /// Emits one notification carrying `(user, timestamp, index)`
    /// synchronously with the append.
    fn record(&self, user: AccountId, timestamp: Timestamp) -> u64;
}

/// Read boundary for ledger query operations.
///
/// All reads are pure snapshots: returned sequences are owned by the caller
/// and mutating them never affects ledger state.
pub trait LedgerReader: Send + Sync {
    /// Number of interactions recorded so far.
    fn total(&self) -> u64;

    /// The `user` field of every interaction, in append order.
    fn all_users(&self) -> Vec<AccountId>;

    /// The `timestamp` field of every interaction, in append order.
    fn all_timestamps(&self) -> Vec<Timestamp>;

    /// `(user, timestamp)` of the interaction at the highest index.
    ///
    /// On an empty ledger this returns the sentinel pair
    /// `(AccountId::zero(), Timestamp::zero())`. The sentinel is
    /// indistinguishable from a genuine entry recorded by the zero identity
    /// at time 0; callers must consult [`total`](Self::total) to tell
    /// "empty ledger" apart from "zero-valued latest entry".
    fn latest(&self) -> (AccountId, Timestamp);
}
