//! Batch generation.
//!
//! The batch shape is fixed: [`BATCH_SIZE`] records, one minute apart starting at
//! [`DEFAULT_ANCHOR`]. Only the randomized fields vary between runs.

use std::io::Write;
use std::ops::Range;

use chrono::{
    DateTime,
    Utc,
};
use fe_core::time::{
    offset_millis,
    parse_utc_millis,
};
use fe_core::Result;
use rand::{
    thread_rng,
    Rng,
};
use tracing::{
    debug,
    info,
    instrument,
};

use crate::model::{
    event_id,
    factory_id,
    line_id,
    machine_id,
    EventRecord,
};
use crate::output::write_pretty;

/// Number of records in a batch.
pub const BATCH_SIZE: u32 = 1000;
/// Instant the first record's `eventTime` lands on.
pub const DEFAULT_ANCHOR: &str = "2026-01-16T08:00:00.000Z";
/// Gap between consecutive `eventTime`s.
pub const EVENT_SPACING_MS: i64 = 60_000;
/// Delay between `eventTime` and `receivedTime`.
pub const RECEIVE_DELAY_MS: Range<i64> = 0..5_000;
/// Random part of `durationMs`, before [`MIN_DURATION_MS`] is added.
pub const DURATION_JITTER_MS: Range<i64> = 0..20_000;
/// Floor for `durationMs`.
pub const MIN_DURATION_MS: i64 = 1_000;
/// Range of `defectCount`.
pub const DEFECT_COUNT: Range<i32> = 0..10;

impl EventRecord {
    /// Build the record at position `index` of a batch anchored at `anchor`.
    ///
    /// Ids and `event_time` depend only on `index`; the receive delay, duration and defect count
    /// are drawn from `rng`, in that order.
    ///
    /// # Errors
    ///
    /// [`fe_core::Error::TimestampOutOfRange`] if either timestamp overflows.
    pub fn synthesize<R: Rng + ?Sized>(index: u32, anchor: DateTime<Utc>, rng: &mut R) -> Result<Self> {
        let event_time = offset_millis(anchor, i64::from(index) * EVENT_SPACING_MS)?;
        let received_time = offset_millis(event_time, rng.gen_range(RECEIVE_DELAY_MS))?;

        Ok(Self {
            event_id: event_id(index),
            event_time,
            received_time,
            machine_id: machine_id(index),
            line_id: line_id(index),
            factory_id: factory_id(index),
            duration_ms: rng.gen_range(DURATION_JITTER_MS) + MIN_DURATION_MS,
            defect_count: rng.gen_range(DEFECT_COUNT),
        })
    }
}

/// Generate `count` records in index order, starting at `anchor`.
///
/// # Errors
///
/// Fails only if a timestamp overflows, which cannot happen for [`DEFAULT_ANCHOR`] and
/// [`BATCH_SIZE`].
#[instrument(skip(rng))]
pub fn generate_batch<R: Rng + ?Sized>(anchor: DateTime<Utc>, count: u32, rng: &mut R) -> Result<Vec<EventRecord>> {
    let records = (0..count)
        .map(|index| EventRecord::synthesize(index, anchor, &mut *rng))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        first = records.first().map(|r| r.event_id.as_str()),
        last = records.last().map(|r| r.event_id.as_str()),
        "generated {} records",
        records.len()
    );
    Ok(records)
}

/// Generate the standard batch with an unseeded RNG and pretty-print it to `writer`.
///
/// # Errors
///
/// Whatever [`write_pretty`] returns.
pub fn run<W: Write + ?Sized>(writer: &mut W) -> Result<()> {
    let anchor = parse_utc_millis(DEFAULT_ANCHOR)?;
    let records = generate_batch(anchor, BATCH_SIZE, &mut thread_rng())?;

    info!(count = records.len(), %anchor, "writing batch");
    write_pretty(&records, writer)
}
