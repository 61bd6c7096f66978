use assertables::*;
use chrono::{
    DateTime,
    Utc,
};
use rstest::*;

use super::*;

#[fixture]
fn record() -> EventRecord {
    let event_time: DateTime<Utc> = "2026-01-16T08:00:00Z".parse().unwrap();
    EventRecord {
        event_id: "bulk-event-0000".into(),
        event_time,
        received_time: event_time + chrono::TimeDelta::milliseconds(1234),
        machine_id: "machine-0".into(),
        line_id: "line-1".into(),
        factory_id: "factory-0".into(),
        duration_ms: 4321,
        defect_count: 7,
    }
}

fn render(records: &[EventRecord]) -> String {
    let mut out = Vec::new();
    write_pretty(records, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
fn test_write_pretty_exact_layout(record: EventRecord) {
    let expected = r#"[
  {
    "eventId": "bulk-event-0000",
    "eventTime": "2026-01-16T08:00:00.000Z",
    "receivedTime": "2026-01-16T08:00:01.234Z",
    "machineId": "machine-0",
    "lineId": "line-1",
    "factoryId": "factory-0",
    "durationMs": 4321,
    "defectCount": 7
  }
]
"#;
    assert_eq!(render(&[record]), expected);
}

#[rstest]
fn test_write_pretty_single_trailing_newline(record: EventRecord) {
    let out = render(&[record.clone(), record]);
    assert_ends_with!(out, "]\n");
    assert!(!out.ends_with("\n\n"));
}

#[rstest]
fn test_write_pretty_empty_batch() {
    assert_eq!(render(&[]), "[]\n");
}

#[rstest]
fn test_write_pretty_round_trips(record: EventRecord) {
    let parsed: Vec<EventRecord> = serde_json::from_str(&render(&[record.clone()])).unwrap();
    assert_eq!(parsed, vec![record]);
}

/// Sink that refuses every write.
struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_write_pretty_propagates_write_failure(record: EventRecord) {
    let res = write_pretty(&[record], &mut BrokenPipe);
    assert!(matches!(res, Err(fe_core::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
