//! Domain model for automobile records.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `AutomobileId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod automobile;
