/// Generic in-memory entity table
///
/// This module provides `Table<T>`, the per-entity-type store backing the
/// whole system. A table assigns monotonically increasing integer IDs on
/// insert and keeps rows visible for the lifetime of the process. It
/// deliberately enforces no uniqueness and no foreign keys; referential
/// checks belong to the feature handlers.
///
/// # Concurrency
///
/// ID assignment is an atomic counter and the row map sits behind an RwLock,
/// so two concurrent inserts never receive the same ID and never lose an
/// update. Each table operation is atomic with respect to the others; nothing
/// spanning multiple operations is.
///
/// # Example
///
/// ```
/// use taskboard_core::store::Table;
///
/// #[derive(Clone)]
/// struct Row { id: i64, name: String }
///
/// let table: Table<Row> = Table::new();
/// let row = table.insert_with(|id| Row { id, name: "first".to_string() });
/// assert_eq!(row.id, 1);
/// assert!(table.contains(row.id));
/// ```

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// An in-memory table for one entity type, keyed by assigned ID.
///
/// Rows are `Clone`; reads hand out owned copies so callers never hold the
/// lock across their own work.
pub struct Table<T> {
    /// Next ID to hand out. Starts at 1; never reused.
    next_id: AtomicI64,

    /// Rows keyed by ID. IDs are monotonic, so key order is insertion order.
    rows: RwLock<BTreeMap<i64, T>>,
}

impl<T: Clone> Table<T> {
    /// Creates an empty table. The first inserted row gets ID 1.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Inserts a new row, assigning the next unused ID.
    ///
    /// The builder closure receives the assigned ID and returns the complete
    /// row. The row is visible to all subsequent reads once this returns.
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        self.rows.write().insert(id, row.clone());
        row
    }

    /// Looks up a row by ID.
    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    /// Returns true if a row with this ID exists.
    ///
    /// This is the primitive behind every referential check.
    pub fn contains(&self, id: i64) -> bool {
        self.rows.read().contains_key(&id)
    }

    /// Returns all rows in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// Returns rows matching the predicate, in insertion order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
