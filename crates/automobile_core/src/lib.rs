//! Core domain logic for the automobile service.
//! This crate is the single source of truth for record semantics; both the
//! REST and GraphQL surfaces go through `AutomobileService`.

pub mod db;
pub mod loader;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, share_connection, DbError, DbResult, SharedConnection};
pub use loader::csv_loader::{load_csv, load_csv_reader, LoadError, LoadReport, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::automobile::{Automobile, AutomobileId, AutomobileInput};
pub use repo::automobile_repo::{AutomobileStore, SqliteAutomobileStore, StoreError, StoreResult};
pub use service::automobile_service::{AutomobileService, DeleteConfirmation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
