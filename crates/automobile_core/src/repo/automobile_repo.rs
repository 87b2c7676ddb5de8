//! Automobile store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide primary-key CRUD over the `automobiles` table.
//! - Keep SQL inside the persistence boundary.
//!
//! # Invariants
//! - Write paths return the row as persisted (`RETURNING`), not the input.
//! - Reads are ordered by `id ASC`, which is insertion order.

use crate::db::{DbError, SharedConnection};
use crate::model::automobile::{Automobile, AutomobileId, AutomobileInput};
use rusqlite::{params, OptionalExtension, Row};
use thiserror::Error;

const AUTOMOBILE_COLUMNS: &str = "id, make, model, year, vin";

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic store error. The message of the underlying failure is kept
/// verbatim so adapters can pass it through.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query capability over automobile rows.
pub trait AutomobileStore {
    fn list_all(&self) -> StoreResult<Vec<Automobile>>;
    fn get_by_id(&self, id: AutomobileId) -> StoreResult<Option<Automobile>>;
    fn insert(&self, input: &AutomobileInput) -> StoreResult<Automobile>;
    /// Overwrites all four attributes. Returns `None` when no row matched.
    fn replace(&self, id: AutomobileId, input: &AutomobileInput)
        -> StoreResult<Option<Automobile>>;
    /// Returns the number of removed rows (0 or 1).
    fn delete_by_id(&self, id: AutomobileId) -> StoreResult<usize>;
}

/// SQLite-backed automobile store over an injected shared connection.
#[derive(Clone)]
pub struct SqliteAutomobileStore {
    conn: SharedConnection,
}

impl SqliteAutomobileStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl AutomobileStore for SqliteAutomobileStore {
    fn list_all(&self) -> StoreResult<Vec<Automobile>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare(&format!("SELECT {AUTOMOBILE_COLUMNS} FROM automobiles ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut automobiles = Vec::new();

        while let Some(row) = rows.next()? {
            automobiles.push(read_automobile(row)?);
        }

        Ok(automobiles)
    }

    fn get_by_id(&self, id: AutomobileId) -> StoreResult<Option<Automobile>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare(&format!("SELECT {AUTOMOBILE_COLUMNS} FROM automobiles WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.get()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(read_automobile(row)?));
        }

        Ok(None)
    }

    fn insert(&self, input: &AutomobileInput) -> StoreResult<Automobile> {
        let conn = self.conn.lock();
        let automobile = conn.query_row(
            &format!(
                "INSERT INTO automobiles (make, model, year, vin)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {AUTOMOBILE_COLUMNS};"
            ),
            params![
                input.make.as_deref(),
                input.model.as_deref(),
                input.year,
                input.vin.as_deref(),
            ],
            read_automobile,
        )?;

        Ok(automobile)
    }

    fn replace(
        &self,
        id: AutomobileId,
        input: &AutomobileInput,
    ) -> StoreResult<Option<Automobile>> {
        let conn = self.conn.lock();
        let automobile = conn
            .query_row(
                &format!(
                    "UPDATE automobiles
                     SET
                        make = ?1,
                        model = ?2,
                        year = ?3,
                        vin = ?4
                     WHERE id = ?5
                     RETURNING {AUTOMOBILE_COLUMNS};"
                ),
                params![
                    input.make.as_deref(),
                    input.model.as_deref(),
                    input.year,
                    input.vin.as_deref(),
                    id.get(),
                ],
                read_automobile,
            )
            .optional()?;

        Ok(automobile)
    }

    fn delete_by_id(&self, id: AutomobileId) -> StoreResult<usize> {
        let conn = self.conn.lock();
        let removed = conn.execute("DELETE FROM automobiles WHERE id = ?1;", [id.get()])?;
        Ok(removed)
    }
}

fn read_automobile(row: &Row<'_>) -> rusqlite::Result<Automobile> {
    Ok(Automobile {
        id: AutomobileId(row.get("id")?),
        make: row.get("make")?,
        model: row.get("model")?,
        year: row.get("year")?,
        vin: row.get("vin")?,
    })
}
