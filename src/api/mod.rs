//! API Module
//!
//! HTTP handlers and routing for the todo service REST API.
//!
//! # Endpoints
//! - `GET /items` - List all items
//! - `POST /items` - Create an item
//! - `GET /items/:id` - Fetch a single item
//! - `PUT /items/:id` - Overwrite an item's fields
//! - `DELETE /items/:id` - Delete an item
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
