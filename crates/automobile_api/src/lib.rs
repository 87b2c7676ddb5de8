//! Transport adapters over the automobile Domain Service.
//!
//! # Responsibility
//! - Map REST and GraphQL requests onto `AutomobileService` calls.
//! - Translate store failures exactly once, into the transport's error shape.
//!
//! # Invariants
//! - Adapters never issue SQL; every read and write goes through the service.
//! - Store calls run on the blocking pool, never on an async worker.

pub mod docs;
pub mod error;
pub mod graphql;
pub mod rest;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use graphql::{build_schema, AutomobileSchema};
pub use server::{create_router, serve};
pub use state::{AppState, SqliteService};
