//! Automobile use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete entry points for both adapters.
//! - Delegate persistence to a store implementation.
//!
//! # Invariants
//! - Not-found is an absent value, never an error.
//! - Store errors are returned unchanged; nothing is retried or classified.
//! - `delete_by_id` reports the same confirmation whether or not a row
//!   existed.

use crate::model::automobile::{Automobile, AutomobileId, AutomobileInput};
use crate::repo::automobile_repo::{AutomobileStore, StoreResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    #[schema(example = "Automobile with ID 1 deleted")]
    pub message: String,
}

impl DeleteConfirmation {
    fn for_id(id: AutomobileId) -> Self {
        Self {
            message: format!("Automobile with ID {id} deleted"),
        }
    }
}

/// Use-case service for automobile CRUD.
pub struct AutomobileService<S: AutomobileStore> {
    store: S,
}

impl<S: AutomobileStore> AutomobileService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every automobile in insertion order. Unbounded.
    pub fn list_all(&self) -> StoreResult<Vec<Automobile>> {
        let automobiles = self.store.list_all()?;
        debug!(
            "event=automobile_list module=service status=ok count={}",
            automobiles.len()
        );
        Ok(automobiles)
    }

    /// Gets one automobile by id; `None` when it does not exist.
    pub fn get_by_id(&self, id: AutomobileId) -> StoreResult<Option<Automobile>> {
        self.store.get_by_id(id)
    }

    /// Inserts a new automobile and returns it with its generated id.
    ///
    /// No validation is applied beyond what the schema enforces.
    pub fn create(&self, input: &AutomobileInput) -> StoreResult<Automobile> {
        let created = self.store.insert(input)?;
        info!(
            "event=automobile_create module=service status=ok id={}",
            created.id
        );
        Ok(created)
    }

    /// Overwrites all four attributes of `id`.
    ///
    /// # Contract
    /// - Full replace: `None` attributes are written as NULL.
    /// - Returns `None` when `id` matches no row; nothing is written then.
    pub fn update(
        &self,
        id: AutomobileId,
        input: &AutomobileInput,
    ) -> StoreResult<Option<Automobile>> {
        let updated = self.store.replace(id, input)?;
        info!(
            "event=automobile_update module=service status=ok id={} matched={}",
            id,
            updated.is_some()
        );
        Ok(updated)
    }

    /// Deletes `id` if present.
    pub fn delete_by_id(&self, id: AutomobileId) -> StoreResult<DeleteConfirmation> {
        let removed = self.store.delete_by_id(id)?;
        info!(
            "event=automobile_delete module=service status=ok id={} removed={}",
            id, removed
        );
        Ok(DeleteConfirmation::for_id(id))
    }
}
