//! Todo Item Module
//!
//! Defines the todo record stored in the key-value table.

use serde::{Deserialize, Serialize};

/// Status assigned to items created without an explicit status.
pub const DEFAULT_STATUS: &str = "todo";

// == Todo Item ==
/// A single todo record keyed by `id`.
///
/// Wire format uses camelCase field names; `dueDate` is serialized as an
/// explicit `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier
    pub id: String,
    /// Short name of the task
    pub name: String,
    /// Free-form details, empty when not provided
    pub description: String,
    /// Workflow status
    pub status: String,
    /// Optional due date
    pub due_date: Option<String>,
}

impl TodoItem {
    // == Constructor ==
    /// Creates an item from its key and mutable fields.
    pub fn from_fields(id: impl Into<String>, fields: ItemFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            status: fields.status,
            due_date: fields.due_date,
        }
    }
}

// == Item Fields ==
/// The four mutable fields of a todo record, with defaults already applied.
///
/// Create and update both write exactly these fields; the key is supplied
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub status: String,
    pub due_date: Option<String>,
}
