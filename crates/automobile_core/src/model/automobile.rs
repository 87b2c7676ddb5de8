//! Automobile domain model.
//!
//! # Responsibility
//! - Define the persisted record shape shared by every transport.
//! - Define the attribute set accepted by create and full-replace update.
//!
//! # Invariants
//! - `id` is assigned by the store, never reused and never mutated.
//! - Every attribute other than `id` is optional; an all-null row is valid.
//! - `vin` is not unique.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utoipa::ToSchema;

/// Store-generated primary key of an automobile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutomobileId(pub i64);

impl AutomobileId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for AutomobileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted automobile record.
///
/// Serializes with exactly the five column names; absent attributes are
/// emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Automobile {
    #[schema(value_type = i64)]
    pub id: AutomobileId,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Model year, stored as a 32-bit integer.
    pub year: Option<i32>,
    /// Vehicle identification number. Not enforced unique.
    pub vin: Option<String>,
}

/// Attribute set written by create and update.
///
/// Update is a full replace: a `None` here overwrites the stored value with
/// NULL. Missing JSON keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AutomobileInput {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
}

impl AutomobileInput {
    /// Builds an input with every attribute present.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            make: Some(make.into()),
            model: Some(model.into()),
            year: Some(year),
            vin: Some(vin.into()),
        }
    }
}
