use rstest::*;

use super::*;

#[rstest]
#[case(0, "bulk-event-0000")]
#[case(7, "bulk-event-0007")]
#[case(999, "bulk-event-0999")]
#[case(12345, "bulk-event-12345")]
fn test_event_id(#[case] index: u32, #[case] expected: &str) {
    assert_eq!(event_id(index), expected);
}

#[rstest]
fn test_line_ids_are_one_based() {
    let lines: Vec<_> = (0..LINE_COUNT).map(line_id).collect();
    assert_eq!(lines, ["line-1", "line-2", "line-3", "line-4", "line-5"]);
}

#[rstest]
fn test_deserialize_accepts_service_format() {
    let json = r#"{
        "eventId": "e-1",
        "eventTime": "2026-01-16T08:00:00.000Z",
        "receivedTime": "2026-01-16T08:00:00.500Z",
        "machineId": "machine-3",
        "lineId": "line-2",
        "factoryId": "factory-1",
        "durationMs": 1500,
        "defectCount": 0
    }"#;
    let record: EventRecord = serde_json::from_str(json).unwrap();
    assert_eq!((record.received_time - record.event_time).num_milliseconds(), 500);
    assert_eq!(record.machine_id, "machine-3");
}
