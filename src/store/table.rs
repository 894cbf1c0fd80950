//! Todo Table Module
//!
//! In-process key-value table holding todo records keyed by id.

use std::collections::HashMap;

use crate::models::{ItemFields, TodoItem};

// == Todo Table ==
/// Key-value table of todo records.
///
/// Supports the five operations the handlers need: scan-all, get-by-key,
/// unconditional put, field update returning the new record, and
/// delete-by-key. Replication, durability, and indexing are not this
/// component's concern.
#[derive(Debug)]
pub struct TodoTable {
    /// Table-name reference, resolved at startup
    name: String,
    /// Record storage
    items: HashMap<String, TodoItem>,
}

impl TodoTable {
    // == Constructor ==
    /// Creates an empty table with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: HashMap::new(),
        }
    }

    /// Returns the table-name reference.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Scan ==
    /// Returns every stored record. No ordering guarantee.
    pub fn scan(&self) -> Vec<TodoItem> {
        self.items.values().cloned().collect()
    }

    // == Get ==
    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<TodoItem> {
        self.items.get(id).cloned()
    }

    // == Put ==
    /// Writes a record unconditionally, overwriting any existing record
    /// with the same id.
    pub fn put(&mut self, item: TodoItem) {
        self.items.insert(item.id.clone(), item);
    }

    // == Update ==
    /// Overwrites the four mutable fields of the record keyed by `id` and
    /// returns the post-update record.
    ///
    /// Updating an id that was never written creates the record (upsert).
    pub fn update(&mut self, id: &str, fields: ItemFields) -> TodoItem {
        let item = TodoItem::from_fields(id, fields);
        self.items.insert(id.to_string(), item.clone());
        item
    }

    // == Delete ==
    /// Removes the record keyed by `id`. Idempotent: deleting an absent id
    /// is a no-op.
    pub fn delete(&mut self, id: &str) {
        self.items.remove(id);
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_STATUS;

    fn fields(name: &str) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_table_new() {
        let table = TodoTable::new("todo-items");
        assert_eq!(table.name(), "todo-items");
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_table_put_and_get() {
        let mut table = TodoTable::new("todo-items");
        let item = TodoItem::from_fields("a", fields("Buy milk"));

        table.put(item.clone());

        assert_eq!(table.get("a"), Some(item));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_get_nonexistent() {
        let table = TodoTable::new("todo-items");
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_table_put_overwrites() {
        let mut table = TodoTable::new("todo-items");

        table.put(TodoItem::from_fields("a", fields("first")));
        table.put(TodoItem::from_fields("a", fields("second")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a").unwrap().name, "second");
    }

    #[test]
    fn test_table_scan_returns_all() {
        let mut table = TodoTable::new("todo-items");

        table.put(TodoItem::from_fields("a", fields("one")));
        table.put(TodoItem::from_fields("b", fields("two")));

        let mut ids: Vec<String> = table.scan().into_iter().map(|i| i.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_table_update_overwrites_fields() {
        let mut table = TodoTable::new("todo-items");
        table.put(TodoItem {
            id: "a".to_string(),
            name: "Buy milk".to_string(),
            description: "2 liters".to_string(),
            status: "todo".to_string(),
            due_date: Some("2026-08-10".to_string()),
        });

        let updated = table.update("a", fields("Buy milk"));

        // Full overwrite: unspecified fields reset to their defaults
        assert_eq!(updated.id, "a");
        assert_eq!(updated.description, "");
        assert!(updated.due_date.is_none());
        assert_eq!(table.get("a"), Some(updated));
    }

    #[test]
    fn test_table_update_nonexistent_creates() {
        let mut table = TodoTable::new("todo-items");

        let created = table.update("ghost", fields("appears"));

        assert_eq!(created.id, "ghost");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ghost"), Some(created));
    }

    #[test]
    fn test_table_delete() {
        let mut table = TodoTable::new("todo-items");
        table.put(TodoItem::from_fields("a", fields("Buy milk")));

        table.delete("a");

        assert!(table.is_empty());
        assert!(table.get("a").is_none());
    }

    #[test]
    fn test_table_delete_idempotent() {
        let mut table = TodoTable::new("todo-items");

        table.delete("never-written");
        table.delete("never-written");

        assert!(table.is_empty());
    }
}
