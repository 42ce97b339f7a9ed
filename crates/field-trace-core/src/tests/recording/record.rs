use crate::{FinishedRecording, ImplementWidth, tests::support::segment};

use chrono::{TimeZone, Utc};

fn sample_record() -> FinishedRecording {
    FinishedRecording {
        date_start: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
        date_end: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
        area: 1.25,
        trace: vec![segment(&[(6.1, 46.2), (6.2, 46.3)]), segment(&[])],
        equipment_width: ImplementWidth::new(3.0).unwrap(),
    }
}

/// WHAT: Records serialize with the history store's field names
/// WHY: Stored histories are read by other tools expecting camelCase keys
#[test]
fn given_finished_recording_when_serializing_then_camel_case_keys_and_coordinate_pairs() {
    // Given: A finished recording
    let record = sample_record();

    // When: Serializing to TOML
    let document = toml::to_string(&record).unwrap();
    let table: toml::Table = toml::from_str(&document).unwrap();

    // Then: Keys and shapes match the history format
    for key in ["dateStart", "dateEnd", "area", "trace", "equipmentWidth"] {
        assert!(table.contains_key(key), "missing key {}", key);
    }
    let first_point = &table["trace"][0][0];
    assert_eq!(first_point.as_array().map(Vec::len), Some(2));
    assert_eq!(table["equipmentWidth"].as_float(), Some(3.0));
}

/// WHAT: Stored records read back into the same value
/// WHY: History files are the only durable copy of a session
#[test]
fn given_serialized_record_when_deserializing_then_equal_to_original() {
    let record = sample_record();

    let document = toml::to_string(&record).unwrap();
    let restored: FinishedRecording = toml::from_str(&document).unwrap();

    assert_eq!(restored, record);
}
