use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque 20-byte caller identity.
///
/// An `AccountId` is supplied by the caller's execution context (for example
/// a gateway or runtime that authenticates the caller before the request
/// reaches the ledger). The ledger never validates, normalizes, or derives
/// anything from it — it is stored verbatim and compared byte-for-byte.
///
/// The all-zeroes value ([`AccountId::zero`]) doubles as the empty-ledger
/// sentinel returned by `latest()`; see that method for the collision caveat.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId {
    bytes: [u8; 20],
}

impl AccountId {
    /// Wrap raw identity bytes.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self { bytes }
    }

    /// The all-zeroes identity.
    pub const fn zero() -> Self {
        Self { bytes: [0u8; 20] }
    }

    /// Create a random identity for tests and demos.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 20];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self { bytes }
    }

    /// Returns `true` for the all-zeroes identity.
    pub fn is_zero(&self) -> bool {
        self.bytes == [0u8; 20]
    }

    /// The raw 20-byte identity.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// Full hex-encoded string (40 characters, no prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("acct:{}", hex::encode(&self.bytes[..4]))
    }

    /// Parse from a hex string (40 hex characters, optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 20 {
            return Err(TypeError::InvalidLength {
                expected: 20,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self { bytes: arr })
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.short_id())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
