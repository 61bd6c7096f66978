//! Error type shared by the Factory Events crates.

use chrono::{
    DateTime,
    Utc,
};
use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or emitting a batch.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink failed (closed pipe, full disk, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `serde_json` refused to encode (or decode) a value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Adding an offset to a timestamp left chrono's representable range.
    #[error("timestamp out of range: {base} + {offset_ms}ms")]
    TimestampOutOfRange {
        /// Timestamp the offset was applied to.
        base: DateTime<Utc>,
        /// Offset in milliseconds.
        offset_ms: i64,
    },

    /// A string could not be parsed as an RFC 3339 timestamp.
    #[error("invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
}
