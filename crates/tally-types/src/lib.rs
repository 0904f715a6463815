//! Foundation types for the Tally interaction ledger.
//!
//! This crate provides the core identity, temporal, and record types used
//! throughout the Tally system. Every other Tally crate depends on
//! `tally-types`.
//!
//! # Key Types
//!
//! - [`AccountId`] — Opaque 20-byte caller identity
//! - [`Timestamp`] — Integer time value supplied by the execution environment
//! - [`Interaction`] — Immutable ledger record (identity, timestamp, index)

pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;

pub use error::TypeError;
pub use identity::AccountId;
pub use record::Interaction;
pub use temporal::Timestamp;
