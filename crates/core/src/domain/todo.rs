// TODO Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TODO ID (assigned by the store, increasing in insertion order)
pub type TodoId = i64;

/// TODO Entity
///
/// Only the persistence service constructs these from stored rows.
/// `id` and `created_at` never change after insert; `updated_at` is
/// refreshed by the store on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub subject: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
