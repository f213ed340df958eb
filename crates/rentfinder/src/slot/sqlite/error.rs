//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` to `SlotError` from `rentfinder_core::storage`.

use rentfinder_core::storage::SlotError;

/// Which slot operation failed, so the error names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOp {
    Read,
    Write,
}

/// Maps a tokio_rusqlite error raised while touching `key`.
///
/// # Error Mapping
///
/// - `SQLITE_CANTOPEN` and closed connections → `SlotError::ConnectionFailed`
/// - Everything else → `ReadFailed` or `WriteFailed`, depending on `op`
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, key: &str, op: SlotOp) -> SlotError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            SlotError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            SlotError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => match op {
            SlotOp::Read => SlotError::ReadFailed {
                key: key.to_string(),
                message: err.to_string(),
            },
            SlotOp::Write => SlotError::WriteFailed {
                key: key.to_string(),
                message: err.to_string(),
            },
        },
    }
}
