//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the query capability the Domain Service is parameterized by.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Missing rows are `None`/zero counts, never errors.
//! - Every SQLite failure is surfaced unchanged as `StoreError::Db`.

pub mod automobile_repo;
