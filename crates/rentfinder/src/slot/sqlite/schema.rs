//! SQLite schema definitions and SQL query constants.

/// SQL statement to create the slot table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS kv_slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const SELECT_SLOT: &str = r#"
SELECT value
FROM kv_slots
WHERE key = ?1
"#;

pub const UPSERT_SLOT: &str = r#"
INSERT INTO kv_slots (key, value, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
"#;

pub const DELETE_SLOT: &str = r#"
DELETE FROM kv_slots
WHERE key = ?1
"#;
