use chrono::{DateTime, SecondsFormat, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use super::{Record, CREATED_AT, ID, UPDATED_AT};

/// Generate a record id: a UUIDv7 whose time component is `now`.
///
/// Callers treat the result as an opaque string.
pub fn generate_id(now: DateTime<Utc>) -> String {
    let seconds = u64::try_from(now.timestamp()).unwrap_or(0);
    let ts = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());
    Uuid::new_v7(ts).to_string()
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Assigns `id` and `created_at` unless the caller already supplied them.
pub fn stamp_insert(record: &mut Record, now: DateTime<Utc>) {
    if !record.has_value(ID) {
        record.insert(ID, generate_id(now));
    }
    if !record.has_value(CREATED_AT) {
        record.insert(CREATED_AT, format_timestamp(now));
    }
}

/// Refreshes `updated_at`, whether or not anything else changed.
pub fn stamp_update(record: &mut Record, now: DateTime<Utc>) {
    record.insert(UPDATED_AT, format_timestamp(now));
}
