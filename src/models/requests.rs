//! Request DTOs for the todo service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use super::item::{ItemFields, DEFAULT_STATUS};

/// Request body for the create and update operations
/// (POST /items, PUT /items/:id)
///
/// # Fields
/// - `id`: optional client-supplied identifier (create only; the update
///   key comes from the path)
/// - `name`: required task name
/// - `description`, `status`, `dueDate`: optional, defaulted at conversion
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteItemRequest {
    /// Optional client-supplied identifier
    #[serde(default)]
    pub id: Option<String>,
    /// The task name
    #[serde(default)]
    pub name: Option<String>,
    /// Optional details
    #[serde(default)]
    pub description: Option<String>,
    /// Optional workflow status
    #[serde(default)]
    pub status: Option<String>,
    /// Optional due date
    #[serde(default)]
    pub due_date: Option<String>,
}

impl WriteItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.name.as_deref() {
            None => Some("Missing required field: name".to_string()),
            Some("") => Some("Field 'name' cannot be empty".to_string()),
            Some(_) => None,
        }
    }

    /// Converts the body into stored fields, applying defaults for
    /// everything but `name`. Call [`validate`](Self::validate) first.
    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            due_date: self.due_date,
        }
    }
}
