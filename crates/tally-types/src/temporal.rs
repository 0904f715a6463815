use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Integer time value attached to an interaction.
///
/// The value is supplied by the execution environment at the moment of
/// append (wall-clock milliseconds in this implementation). The ledger
/// stores whatever it is given: timestamps are non-decreasing across appends
/// in practice, but the ledger neither enforces nor assumes monotonicity.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Wrap an explicit time value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The zero timestamp, used as the empty-ledger sentinel.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Current wall-clock time as milliseconds since the UNIX epoch.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self(ms)
    }

    /// The raw integer value.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
