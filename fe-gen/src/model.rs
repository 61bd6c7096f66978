//! The event record emitted by the generator.
use chrono::{
    DateTime,
    Utc,
};
use fe_core::time::utc_millis;
use serde::{
    Deserialize,
    Serialize,
};

/// Number of distinct machines; `machineId` cycles through `machine-0..=machine-9`.
pub const MACHINE_COUNT: u32 = 10;
/// Number of distinct lines; `lineId` cycles through `line-1..=line-5`.
pub const LINE_COUNT: u32 = 5;
/// Number of distinct factories; `factoryId` cycles through `factory-0..=factory-2`.
pub const FACTORY_COUNT: u32 = 3;

/// One synthetic manufacturing event, shaped like the ingestion service's `EventRequest`.
///
/// Field order here is the field order on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// `bulk-event-NNNN`, unique within a batch.
    pub event_id: String,
    /// When the event happened on the shop floor.
    #[serde(with = "utc_millis")]
    pub event_time: DateTime<Utc>,
    /// When the event reached the collector; never before `event_time`.
    #[serde(with = "utc_millis")]
    pub received_time: DateTime<Utc>,
    /// Machine that produced the event.
    pub machine_id: String,
    /// Production line the machine sits on.
    pub line_id: String,
    /// Factory the line belongs to.
    pub factory_id: String,
    /// How long the operation took.
    pub duration_ms: i64,
    /// Number of defects observed during the operation.
    pub defect_count: i32,
}

/// `bulk-event-` followed by `index` zero-padded to four digits.
#[must_use]
pub fn event_id(index: u32) -> String {
    format!("bulk-event-{index:04}")
}

/// Machine for the record at `index`.
#[must_use]
pub fn machine_id(index: u32) -> String {
    format!("machine-{}", index % MACHINE_COUNT)
}

/// Line for the record at `index`; line numbers are 1-based.
#[must_use]
pub fn line_id(index: u32) -> String {
    format!("line-{}", index % LINE_COUNT + 1)
}

/// Factory for the record at `index`.
#[must_use]
pub fn factory_id(index: u32) -> String {
    format!("factory-{}", index % FACTORY_COUNT)
}

#[cfg(test)]
mod tests;
