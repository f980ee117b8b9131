mod common;

use common::*;
use std::collections::BTreeSet;

#[test]
fn test_replay_wraps_from_start() {
    assert_eq!(visit_order(5, 3), vec![3, 4, 0, 1, 2]);
}

#[test]
fn test_replay_single_slot_yields_one_record() {
    assert_eq!(visit_order(1, 0), vec![0]);
}

#[test]
fn test_replay_from_zero_visits_in_order() {
    assert_eq!(visit_order(4, 0), vec![0, 1, 2, 3]);
}

#[test]
fn test_replay_length_and_coverage() {
    for capacity in 1..=40 {
        for start in 0..capacity {
            let order = visit_order(capacity, start);
            assert_eq!(order.len(), capacity, "capacity {capacity}, start {start}");
            assert_eq!(order[0], start);

            let unique: BTreeSet<usize> = order.iter().copied().collect();
            assert_eq!(unique.len(), capacity);
            assert_eq!(unique, (0..capacity).collect::<BTreeSet<_>>());
        }
    }
}

#[test]
fn test_replay_records_carry_raw_and_flags() {
    let table = ab_table();
    let buffer = [0x00, 0x01, 0x02, 0x03];
    let records: Vec<_> = replay(&buffer, 2, &table).unwrap().collect();

    let raws: Vec<u16> = records.iter().map(|r| r.raw).collect();
    assert_eq!(raws, vec![0x02, 0x03, 0x00, 0x01]);
    assert_eq!(records[0].flags, vec!["B"]);
    assert_eq!(records[1].flags, vec!["A", "B"]);
    assert!(records[2].flags.is_empty());
    assert_eq!(records[3].flags, vec!["A"]);
}

#[test]
fn test_replay_captured_log() {
    let table = FlagLayout::Capture.table();
    let records: Vec<_> = replay(&CAPTURED_LOG, CAPTURED_LOG_START, &table)
        .unwrap()
        .collect();

    assert_eq!(records.len(), PHYS_STATE_SIZE);
    assert_eq!(records[0].index, CAPTURED_LOG_START);
    assert_eq!(records.last().unwrap().index, CAPTURED_LOG_START - 1);
    assert_eq!(records[PHYS_STATE_SIZE - CAPTURED_LOG_START].index, 0);

    // Slot 54 holds 5140 = 0x1414.
    assert_eq!(records[0].raw, 5140);
    assert_eq!(
        records[0].to_string(),
        "5140 JD_SERIAL_RECEIVING_HEADER JD_SERIAL_TX_DRAIN_ENABLE JD_SERIAL_LO_PULSE_START DEVICE_COMPONENT_RUNNING "
    );
}

#[test]
fn test_replay_record_serializes() {
    let table = ab_table();
    let record = replay(&[0x03, 0x00], 1, &table)
        .unwrap()
        .nth(1)
        .unwrap();
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({"index": 0, "raw": 3, "flags": ["A", "B"]})
    );
}
