//! SQLite slot implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use rentfinder_core::record::format_timestamp;
use rentfinder_core::storage::{DurableSlot, Result, SlotError};

use super::error::{map_tokio_rusqlite_error, SlotOp};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Durable slots stored as rows of a SQLite file.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Opens (creating if needed) the database file at `path`.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| SlotError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens a private in-memory database. Data is lost when the slot is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| SlotError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| SlotError::ConnectionFailed(e.to_string()))
    }
}

#[async_trait]
impl DurableSlot for SqliteSlot {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let key_str = key.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_SLOT).map_err(wrap_err)?;
                match stmt.query_row([&key_str], |row| row.get::<_, String>(0)) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, key, SlotOp::Read))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let key_str = key.to_string();
        let value_str = value.to_string();
        let updated_at = format_timestamp(Utc::now());

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPSERT_SLOT, [&key_str, &value_str, &updated_at])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, key, SlotOp::Write))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key_str = key.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_SLOT, [&key_str])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, key, SlotOp::Write))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_key() {
        let slot = SqliteSlot::open_in_memory().await.unwrap();
        assert_eq!(slot.read("rentfinder_db").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_value() {
        let slot = SqliteSlot::open_in_memory().await.unwrap();

        slot.write("rentfinder_db", "{}").await.unwrap();
        slot.write("rentfinder_db", "{\"properties\":[]}").await.unwrap();

        assert_eq!(
            slot.read("rentfinder_db").await.unwrap().as_deref(),
            Some("{\"properties\":[]}")
        );
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let slot = SqliteSlot::open_in_memory().await.unwrap();

        slot.write("rentfinder_db", "db").await.unwrap();
        slot.write("auth_user", "user").await.unwrap();
        slot.remove("auth_user").await.unwrap();

        assert_eq!(slot.read("rentfinder_db").await.unwrap().as_deref(), Some("db"));
        assert_eq!(slot.read("auth_user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let slot = SqliteSlot::open_in_memory().await.unwrap();
        assert!(slot.remove("never_written").await.is_ok());
    }
}
