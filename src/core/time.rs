use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Record ids are the creation instant in Unix milliseconds, as a decimal string.
/// Two inserts within the same millisecond collide on the primary key.
pub(crate) fn millis_id() -> String {
    millis_id_at(OffsetDateTime::now_utc())
}

pub(crate) fn millis_id_at(value: OffsetDateTime) -> String {
    (value.unix_timestamp_nanos() / 1_000_000).to_string()
}

pub(crate) fn format_offset(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}
