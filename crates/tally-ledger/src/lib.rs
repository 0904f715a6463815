//! Append-only interaction ledger for Tally.
//!
//! This crate is the heart of Tally. It provides:
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `InMemoryLedger` implementation with atomic index assignment
//! - The decoupled notification layer: `InteractionSink`, `NoticeHub`,
//!   and per-subscriber filtering
//!
//! The ledger is an ordered, immutable, indexed sequence of
//! [`Interaction`](tally_types::Interaction) records. Every operation is a
//! total function: appends are unconditional, reads never fail, and the only
//! failure class (environment-level resource exhaustion) surfaces unmodified
//! rather than as a ledger error kind.

pub mod memory;
pub mod notify;
pub mod traits;

pub use memory::InMemoryLedger;
pub use notify::{InteractionNotice, InteractionSink, NoopSink, NoticeFilter, NoticeHub, NoticeStream};
pub use traits::{LedgerReader, LedgerWriter};
