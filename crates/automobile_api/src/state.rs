//! Shared adapter state.

use crate::error::ApiError;
use automobile_core::{AutomobileService, SharedConnection, SqliteAutomobileStore, StoreResult};
use std::sync::Arc;

pub type SqliteService = AutomobileService<SqliteAutomobileStore>;

/// Service handle shared by every request of both adapters.
#[derive(Clone)]
pub struct AppState {
    service: Arc<SqliteService>,
}

impl AppState {
    pub fn new(service: SqliteService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds the service over an already bootstrapped connection.
    pub fn from_connection(conn: SharedConnection) -> Self {
        Self::new(AutomobileService::new(SqliteAutomobileStore::new(conn)))
    }

    /// Runs one service call on the blocking pool.
    ///
    /// The caller is suspended until the store call finishes; there is no
    /// timeout.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&SqliteService) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let result = tokio::task::spawn_blocking(move || op(&service)).await?;
        Ok(result?)
    }
}
