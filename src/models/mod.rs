//! Request and Response models for the todo service API
//!
//! This module defines the stored entity and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{ItemFields, TodoItem, DEFAULT_STATUS};
pub use requests::WriteItemRequest;
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
