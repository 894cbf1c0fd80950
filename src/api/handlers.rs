//! API Handlers
//!
//! HTTP request handlers for each todo service endpoint. Every handler
//! performs a single call against the table.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::{DeleteResponse, HealthResponse, TodoItem, WriteItemRequest};
use crate::store::TodoTable;

/// Application state shared across all handlers.
///
/// Holds the table client behind Arc<RwLock<>>; it is constructed once at
/// startup and injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe todo table
    pub table: Arc<RwLock<TodoTable>>,
}

impl AppState {
    /// Creates a new AppState with the given table.
    pub fn new(table: TodoTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(TodoTable::new(config.table_name.clone()))
    }
}

/// Handler for GET /items
///
/// Returns every stored item via a full scan. No ordering guarantee,
/// no pagination.
pub async fn list_items_handler(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    let table = state.table.read().await;
    Json(table.scan())
}

/// Handler for GET /items/:id
///
/// Looks up a single item by id; 404 when absent.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>> {
    let table = state.table.read().await;
    let item = table.get(&id).ok_or(ServiceError::NotFound)?;

    Ok(Json(item))
}

/// Handler for POST /items
///
/// Builds an item from the body, generating an id when the client did not
/// supply one, and writes it unconditionally. An existing item with the
/// same id is overwritten without an existence check.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(mut req): Json<WriteItemRequest>,
) -> Result<(StatusCode, Json<TodoItem>)> {
    // Validate before any store call
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let id = req
        .id
        .take()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let item = TodoItem::from_fields(id, req.into_fields());

    let mut table = state.table.write().await;
    table.put(item.clone());

    info!(id = %item.id, name = %item.name, "created item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for PUT /items/:id
///
/// Overwrites the four mutable fields of the item keyed by the path id and
/// returns the post-update record as reported by the table. Updating an id
/// that was never written creates it (table-level upsert).
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<WriteItemRequest>,
) -> Result<Json<TodoItem>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let mut table = state.table.write().await;
    let item = table.update(&id, req.into_fields());

    info!(id = %item.id, status = %item.status, "updated item");

    Ok(Json(item))
}

/// Handler for DELETE /items/:id
///
/// Deletes unconditionally; 204 whether or not the item existed.
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<DeleteResponse>) {
    let mut table = state.table.write().await;
    table.delete(&id);

    info!(id = %id, "deleted item");

    (StatusCode::NO_CONTENT, Json(DeleteResponse::new()))
}

/// Fallback handler for every (method, path) pair outside the route table,
/// including PUT/DELETE without an item id.
pub async fn unsupported_handler() -> ServiceError {
    ServiceError::UnsupportedRequest
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
