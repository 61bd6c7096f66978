//! UTC timestamps at millisecond precision.
//!
//! The ingestion service reads and writes instants as `2026-01-16T08:00:00.000Z`: always UTC,
//! always exactly three fractional digits, always a literal `Z`. Everything here produces or
//! consumes that shape.

use chrono::{
    DateTime,
    SecondsFormat,
    TimeDelta,
    Utc,
};

use crate::errors::{
    Error,
    Result,
};

/// Parse an RFC 3339 timestamp and normalize it to UTC.
///
/// # Errors
///
/// [`Error::InvalidTimestamp`] if `input` is not RFC 3339.
pub fn parse_utc_millis(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp { input: input.to_owned(), source })
}

/// Render `ts` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn format_utc_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `base + offset_ms`.
///
/// # Errors
///
/// [`Error::TimestampOutOfRange`] if the offset or the sum is not representable.
pub fn offset_millis(base: DateTime<Utc>, offset_ms: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_milliseconds(offset_ms)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or(Error::TimestampOutOfRange { base, offset_ms })
}

/// `serde(with = "...")` adapter for `DateTime<Utc>` fields in the millisecond wire format.
pub mod utc_millis {
    use chrono::{
        DateTime,
        Utc,
    };
    use serde::{
        Deserialize,
        Deserializer,
        Serializer,
    };

    /// Serialize as a millisecond-precision `Z` string.
    ///
    /// # Errors
    ///
    /// Whatever `serializer` reports.
    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_utc_millis(ts))
    }

    /// Deserialize from any RFC 3339 string.
    ///
    /// # Errors
    ///
    /// The value is not a string, or not RFC 3339.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc_millis(&raw).map_err(serde::de::Error::custom)
    }
}
