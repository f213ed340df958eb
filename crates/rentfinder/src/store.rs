//! The embedded document store.
//!
//! A [`Store`] keeps the whole [`Database`] as one JSON blob under one key
//! of a [`DurableSlot`]. Every operation is a full `load -> compute -> save`
//! cycle, serialized by an async mutex so two logical operations of the
//! same process never interleave. Slot failures never reach the caller:
//! unreadable or corrupt blobs read as an empty database and failed writes
//! are logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use rentfinder_core::record::{
    matches_all, sort_records, stamp_insert, stamp_update, values_equal, Database, Record,
    CREATED_AT, ID,
};
use rentfinder_core::storage::DurableSlot;

use crate::query::{Action, Query, QueryBuilder};

/// Slot key of the database blob.
pub const DEFAULT_DB_KEY: &str = "rentfinder_db";

#[derive(Clone)]
pub struct Store {
    slot: Arc<dyn DurableSlot>,
    key: Arc<str>,
    clock: Arc<dyn Clock + Send + Sync>,
    lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(slot: Arc<dyn DurableSlot>) -> Self {
        Self {
            slot,
            key: Arc::from(DEFAULT_DB_KEY),
            clock: Arc::new(DefaultClock),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stores the blob under `key` instead of [`DEFAULT_DB_KEY`].
    pub fn with_key(mut self, key: impl AsRef<str>) -> Self {
        self.key = Arc::from(key.as_ref());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Starts a query against `table`.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone(), table)
    }

    /// Reads the database, initializing the slot when it is absent or corrupt.
    pub async fn load(&self) -> Database {
        let _guard = self.lock.lock().await;
        self.read_database().await
    }

    /// Replaces the persisted database.
    pub async fn save(&self, db: &Database) {
        let _guard = self.lock.lock().await;
        self.write_database(db).await;
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    async fn read_database(&self) -> Database {
        match self.slot.read(&self.key).await {
            Ok(Some(raw)) => match Database::parse(&raw) {
                Some(db) => return db,
                None => warn!(key = %self.key, "Stored database is corrupt, resetting"),
            },
            Ok(None) => debug!(key = %self.key, "Initializing empty database"),
            Err(err) => {
                // Do not overwrite a blob we merely failed to read.
                warn!(key = %self.key, error = %err, "Failed to read database slot");
                return Database::empty();
            }
        }

        let db = Database::empty();
        self.write_database(&db).await;
        db
    }

    async fn write_database(&self, db: &Database) {
        let raw = match serde_json::to_string(db) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Failed to serialize database");
                return;
            }
        };
        if let Err(err) = self.slot.write(&self.key, &raw).await {
            warn!(key = %self.key, error = %err, "Failed to write database slot");
        }
    }

    /// Runs a select, update or delete and returns the affected rows.
    pub(crate) async fn execute(&self, query: Query) -> Vec<Record> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_database().await;
        let Query {
            table,
            filters,
            order,
            action,
        } = query;
        let action_name = action.name();

        let rows = match action {
            Action::Select => {
                let mut rows: Vec<Record> = db
                    .table(&table)
                    .iter()
                    .filter(|record| matches_all(&filters, record))
                    .cloned()
                    .collect();
                if let Some(order) = &order {
                    sort_records(&mut rows, order);
                }
                rows
            }
            Action::Update(mut patch) => {
                patch.remove(ID);
                patch.remove(CREATED_AT);
                let now = self.now();
                let mut updated = Vec::new();
                for record in db.table_mut(&table).iter_mut() {
                    if matches_all(&filters, record) {
                        record.merge(&patch);
                        stamp_update(record, now);
                        updated.push(record.clone());
                    }
                }
                self.write_database(&db).await;
                updated
            }
            Action::Delete => {
                let rows = db.table_mut(&table);
                let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(rows)
                    .into_iter()
                    .partition(|record| matches_all(&filters, record));
                *rows = kept;
                self.write_database(&db).await;
                removed
            }
        };

        debug!(
            table = %table,
            action = action_name,
            filters = filters.len(),
            rows = rows.len(),
            "Executed query"
        );
        rows
    }

    /// Stamps and appends `records`.
    ///
    /// A record whose id already exists replaces the stored row in place. The
    /// replacement keeps the stored `created_at` and gets a fresh `updated_at`.
    pub(crate) async fn insert(&self, table: &str, records: Vec<Record>) -> Vec<Record> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_database().await;
        let now = self.now();

        let rows = db.table_mut(table);
        let mut inserted = Vec::with_capacity(records.len());
        for mut record in records {
            match position_of_id(rows, &record) {
                Some(index) => {
                    if let Some(created_at) = rows[index].get(CREATED_AT).cloned() {
                        record.insert(CREATED_AT, created_at);
                    }
                    stamp_insert(&mut record, now);
                    stamp_update(&mut record, now);
                    rows[index] = record.clone();
                }
                None => {
                    stamp_insert(&mut record, now);
                    rows.push(record.clone());
                }
            }
            inserted.push(record);
        }
        self.write_database(&db).await;

        debug!(table = %table, rows = inserted.len(), "Inserted records");
        inserted
    }
}

/// Index of the stored row sharing `record`'s id, compared as JSON values.
fn position_of_id(rows: &[Record], record: &Record) -> Option<usize> {
    let id = record.get(ID).filter(|id| !id.is_null())?;
    rows.iter()
        .position(|row| row.get(ID).is_some_and(|stored| values_equal(stored, id)))
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::InMemorySlot;
    use crate::test_support::{clocked_store, fixed_now, MutableClock};
    use async_trait::async_trait;
    use rentfinder_core::record::{KNOWN_TABLES, PROPERTIES_TABLE, UPDATED_AT};
    use rentfinder_core::storage::{Result as SlotResult, SlotError};
    use serde_json::json;
    use std::collections::HashSet;

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    /// Reads fine, refuses every write.
    struct ReadOnlySlot(InMemorySlot);

    #[async_trait]
    impl DurableSlot for ReadOnlySlot {
        async fn read(&self, key: &str) -> SlotResult<Option<String>> {
            self.0.read(key).await
        }

        async fn write(&self, key: &str, _value: &str) -> SlotResult<()> {
            Err(SlotError::WriteFailed {
                key: key.to_string(),
                message: "read-only".to_string(),
            })
        }

        async fn remove(&self, key: &str) -> SlotResult<()> {
            self.0.remove(key).await
        }
    }

    // ==================== Load / Save Tests ====================

    #[tokio::test]
    async fn test_load_initializes_missing_slot() {
        let slot = InMemorySlot::new();
        let store = Store::new(Arc::new(slot.clone()));

        let db = store.load().await;

        assert_eq!(db, Database::empty());
        let raw = slot.read(DEFAULT_DB_KEY).await.unwrap().unwrap();
        let persisted = Database::parse(&raw).unwrap();
        for table in KNOWN_TABLES {
            assert!(persisted.table(table).is_empty());
            assert!(persisted.table_names().any(|name| name == table));
        }
    }

    #[tokio::test]
    async fn test_corrupt_blob_self_heals() {
        let slot = InMemorySlot::new();
        slot.write(DEFAULT_DB_KEY, "{not json").await.unwrap();
        let store = Store::new(Arc::new(slot.clone()));

        assert_eq!(store.load().await, Database::empty());

        let raw = slot.read(DEFAULT_DB_KEY).await.unwrap().unwrap();
        assert!(Database::parse(&raw).is_some());
    }

    #[tokio::test]
    async fn test_wrong_shape_blob_reads_as_empty() {
        let slot = InMemorySlot::new();
        slot.write(DEFAULT_DB_KEY, "[1, 2, 3]").await.unwrap();
        let store = Store::new(Arc::new(slot));

        let rows = store.from(PROPERTIES_TABLE).select("*").await;

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let (store, _, _) = clocked_store();
        let mut db = Database::empty();
        db.table_mut("custom").push(record(json!({"id": "c1"})));

        store.save(&db).await;

        assert_eq!(store.load().await, db);
    }

    #[tokio::test]
    async fn test_custom_key() {
        let slot = InMemorySlot::new();
        let store = Store::new(Arc::new(slot.clone())).with_key("other_db");

        store.load().await;

        assert_eq!(store.key(), "other_db");
        assert!(slot.read("other_db").await.unwrap().is_some());
        assert!(slot.read(DEFAULT_DB_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_failures_are_swallowed() {
        let store = Store::new(Arc::new(ReadOnlySlot(InMemorySlot::new())));

        let inserted = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "A"}))])
            .await;

        // The caller still sees the stamped record; nothing was persisted.
        assert_eq!(inserted.rows().len(), 1);
        assert!(store.from(PROPERTIES_TABLE).await.is_empty());
    }

    // ==================== Insert Tests ====================

    #[tokio::test]
    async fn test_insert_then_read() {
        let (store, _, _) = clocked_store();

        let inserted = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "Loft", "rent": 1800}))])
            .await
            .select("*")
            .single()
            .await
            .unwrap();
        let id = inserted.id().unwrap().to_string();

        let read = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq("id", id.as_str())
            .single()
            .await
            .unwrap();

        assert_eq!(read, inserted);
        assert_eq!(read.get("title"), Some(&json!("Loft")));
        assert_eq!(read.get(CREATED_AT), Some(&json!("2024-01-15T10:30:00.000Z")));
        assert!(read.get(UPDATED_AT).is_none());
    }

    #[tokio::test]
    async fn test_insert_ids_are_unique() {
        let (store, _, _) = clocked_store();
        let batch: Vec<Record> = (0..200).map(|i| record(json!({"n": i}))).collect();

        store.from(PROPERTIES_TABLE).insert(batch).await;
        for i in 0..20 {
            store
                .from(PROPERTIES_TABLE)
                .insert(vec![record(json!({"n": 200 + i}))])
                .await;
        }

        let rows = store.from(PROPERTIES_TABLE).await;
        let ids: HashSet<&str> = rows.iter().filter_map(Record::id).collect();
        assert_eq!(rows.len(), 220);
        assert_eq!(ids.len(), 220);
    }

    #[tokio::test]
    async fn test_insert_preserves_order_and_created_at() {
        let (store, _, clock) = clocked_store();

        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "first"}))])
            .await;
        clock.advance_seconds(60);
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "second"}))])
            .await;

        let rows = store.from(PROPERTIES_TABLE).await;
        let titles: Vec<_> = rows.iter().map(|r| r.get("title").cloned()).collect();
        assert_eq!(titles, vec![Some(json!("first")), Some(json!("second"))]);
        assert!(rows[0].get(CREATED_AT).unwrap().as_str() < rows[1].get(CREATED_AT).unwrap().as_str());
    }

    #[tokio::test]
    async fn test_insert_keeps_supplied_id_and_created_at() {
        let (store, _, _) = clocked_store();

        let row = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(
                json!({"id": "seed-1", "created_at": "2023-12-01T00:00:00.000Z"}),
            )])
            .await
            .select("*")
            .single()
            .await
            .unwrap();

        assert_eq!(row.id(), Some("seed-1"));
        assert_eq!(row.get(CREATED_AT), Some(&json!("2023-12-01T00:00:00.000Z")));
    }

    #[tokio::test]
    async fn test_insert_existing_id_replaces_row() {
        let (store, _, clock) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "a", "v": 1}))])
            .await;
        clock.advance_seconds(3600);
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "other", "v": 2}))])
            .await;
        clock.advance_seconds(3600);

        let replaced = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "a", "v": 10}))])
            .await
            .select("*")
            .single()
            .await
            .unwrap();

        assert_eq!(replaced.get(CREATED_AT), Some(&json!("2024-01-15T10:30:00.000Z")));
        assert_eq!(replaced.get(UPDATED_AT), Some(&json!("2024-01-15T12:30:00.000Z")));

        let rows = store.from(PROPERTIES_TABLE).await;
        let ids: Vec<_> = rows.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("other")]);
        assert_eq!(rows[0].get("v"), Some(&json!(10)));
        assert_eq!(rows[0].get(CREATED_AT), Some(&json!("2024-01-15T10:30:00.000Z")));
        assert!(rows[0].get(CREATED_AT).unwrap().as_str() <= rows[1].get(CREATED_AT).unwrap().as_str());
    }

    #[tokio::test]
    async fn test_insert_new_row_has_no_updated_at() {
        let (store, _, _) = clocked_store();

        let row = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "fresh"}))])
            .await
            .select("*")
            .single()
            .await
            .unwrap();

        assert!(row.get(UPDATED_AT).is_none());
    }

    #[tokio::test]
    async fn test_insert_numeric_id_stays_unique() {
        let (store, _, _) = clocked_store();
        store
            .from("t")
            .insert(vec![record(json!({"id": 5, "v": 1}))])
            .await;

        store
            .from("t")
            .insert(vec![record(json!({"id": 5, "v": 2}))])
            .await;

        let rows = store.from("t").eq(ID, 5).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("v"), Some(&json!(2)));
        assert_eq!(store.from("t").await.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_ids_in_one_batch_collapse() {
        let (store, _, _) = clocked_store();

        store
            .from("t")
            .insert(vec![
                record(json!({"id": 7.0, "v": 1})),
                record(json!({"id": 7, "v": 2})),
            ])
            .await;

        let rows = store.from("t").await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("v"), Some(&json!(2)));
    }

    #[tokio::test]
    async fn test_insert_creates_unknown_table() {
        let (store, _, _) = clocked_store();

        store
            .from("tenants")
            .insert(vec![record(json!({"name": "Sarah"}))])
            .await;

        assert!(store.load().await.table_names().any(|name| name == "tenants"));
        assert_eq!(store.from("tenants").await.len(), 1);
    }

    // ==================== Update Tests ====================

    #[tokio::test]
    async fn test_update_refreshes_updated_at_with_identical_patch() {
        let (store, _, clock) = clocked_store();
        let id = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "Loft", "rent": 1800}))])
            .await
            .select("*")
            .single()
            .await
            .and_then(|r| r.id().map(str::to_string))
            .unwrap();
        let patch = record(json!({"rent": 1900}));

        clock.advance_seconds(5);
        let first = store
            .from(PROPERTIES_TABLE)
            .update(patch.clone())
            .eq("id", id.as_str())
            .single()
            .await
            .unwrap();
        clock.advance_seconds(5);
        let second = store
            .from(PROPERTIES_TABLE)
            .update(patch)
            .eq("id", id.as_str())
            .single()
            .await
            .unwrap();

        assert_eq!(first.get(UPDATED_AT), Some(&json!("2024-01-15T10:30:05.000Z")));
        assert_eq!(second.get(UPDATED_AT), Some(&json!("2024-01-15T10:30:10.000Z")));
        let strip = |mut r: Record| {
            r.remove(UPDATED_AT);
            r
        };
        assert_eq!(strip(first), strip(second));
    }

    #[tokio::test]
    async fn test_update_cannot_change_id_or_created_at() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "p1", "title": "Loft"}))])
            .await;

        let row = store
            .from(PROPERTIES_TABLE)
            .update(record(json!({"id": "p2", "created_at": "1999-01-01", "title": "Den"})))
            .eq("id", "p1")
            .select("*")
            .single()
            .await
            .unwrap();

        assert_eq!(row.id(), Some("p1"));
        assert_eq!(row.get(CREATED_AT), Some(&json!(format_now())));
        assert_eq!(row.get("title"), Some(&json!("Den")));
    }

    fn format_now() -> String {
        rentfinder_core::record::format_timestamp(fixed_now())
    }

    #[tokio::test]
    async fn test_update_applies_to_every_match() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![
                record(json!({"id": "a", "city": "Austin"})),
                record(json!({"id": "b", "city": "Boston"})),
                record(json!({"id": "c", "city": "Austin"})),
            ])
            .await;

        let first = store
            .from(PROPERTIES_TABLE)
            .update(record(json!({"featured": true})))
            .eq("city", "Austin")
            .single()
            .await
            .unwrap();

        assert_eq!(first.id(), Some("a"));
        let featured = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq("featured", true)
            .await;
        let ids: Vec<_> = featured.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_update_without_match_returns_none() {
        let (store, _, _) = clocked_store();

        let row = store
            .from(PROPERTIES_TABLE)
            .update(record(json!({"title": "x"})))
            .eq("id", "missing")
            .single()
            .await;

        assert!(row.is_none());
    }

    // ==================== Delete Tests ====================

    #[tokio::test]
    async fn test_delete_removes_exactly_matches() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![
                record(json!({"id": "a", "owner": "u1"})),
                record(json!({"id": "b", "owner": "u2"})),
                record(json!({"id": "c", "owner": "u1"})),
            ])
            .await;

        let removed = store.from(PROPERTIES_TABLE).delete().eq("owner", "u1").await;

        let removed_ids: Vec<_> = removed.iter().filter_map(Record::id).collect();
        assert_eq!(removed_ids, vec!["a", "c"]);
        let left = store.from(PROPERTIES_TABLE).await;
        let left_ids: Vec<_> = left.iter().filter_map(Record::id).collect();
        assert_eq!(left_ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_delete_without_match_keeps_table() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "a"}))])
            .await;

        let removed = store.from(PROPERTIES_TABLE).delete().eq("id", "zzz").await;

        assert!(removed.is_empty());
        assert_eq!(store.from(PROPERTIES_TABLE).await.len(), 1);
    }

    // ==================== Select / Order Tests ====================

    #[tokio::test]
    async fn test_order_is_stable() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![
                record(json!({"id": "c", "v": 2})),
                record(json!({"id": "a", "v": 1})),
                record(json!({"id": "b", "v": 1})),
            ])
            .await;

        let rows = store.from(PROPERTIES_TABLE).select("*").order("v", true).await;

        let ids: Vec<_> = rows.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_order_descending_puts_nulls_last() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![
                record(json!({"id": "a", "rent": null})),
                record(json!({"id": "b", "rent": 900})),
                record(json!({"id": "c"})),
                record(json!({"id": "d", "rent": 1500})),
            ])
            .await;

        let rows = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .order("rent", false)
            .await;

        let ids: Vec<_> = rows.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_eq_is_strict_and_conjunctive() {
        let (store, _, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![
                record(json!({"id": "a", "beds": "2", "city": "Austin"})),
                record(json!({"id": "b", "beds": 2, "city": "Austin"})),
                record(json!({"id": "c", "beds": 2, "city": "austin"})),
            ])
            .await;

        let rows = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq("beds", 2)
            .eq("city", "Austin")
            .await;

        let ids: Vec<_> = rows.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_select_single_without_match() {
        let (store, _, _) = clocked_store();

        let row = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq("id", "nope")
            .single()
            .await;

        assert!(row.is_none());
    }

    // ==================== Persistence Tests ====================

    #[tokio::test]
    async fn test_round_trip_across_fresh_store() {
        let (store, slot, _) = clocked_store();
        store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"id": "a", "title": "Loft"}))])
            .await;
        let before = store.from(PROPERTIES_TABLE).await;

        let fresh = Store::new(Arc::new(slot.clone()))
            .with_clock(Arc::new(MutableClock::new(fixed_now())));
        let after = fresh.from(PROPERTIES_TABLE).await;

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_insert_update_delete_scenario() {
        let (store, _, clock) = clocked_store();

        let created = store
            .from(PROPERTIES_TABLE)
            .insert(vec![record(json!({"title": "Loft", "rent": 1800}))])
            .await
            .select("*")
            .single()
            .await
            .unwrap();
        let id = created.id().unwrap().to_string();

        clock.advance_seconds(30);
        let updated = store
            .from(PROPERTIES_TABLE)
            .update(record(json!({"rent": 1950})))
            .eq("id", id.as_str())
            .select("*")
            .single()
            .await
            .unwrap();
        assert_eq!(updated.get("rent"), Some(&json!(1950)));
        assert_eq!(updated.get(CREATED_AT), created.get(CREATED_AT));
        assert_eq!(updated.get(UPDATED_AT), Some(&json!("2024-01-15T10:30:30.000Z")));

        let removed = store.from(PROPERTIES_TABLE).delete().eq("id", id.as_str()).await;
        assert_eq!(removed.len(), 1);

        let gone = store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq("id", id.as_str())
            .single()
            .await;
        assert!(gone.is_none());
    }
}
