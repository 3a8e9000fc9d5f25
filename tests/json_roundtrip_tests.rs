use bezier_track_engine::json::write_track_build;
use bezier_track_engine::{
    build_track, parse_track_input, parse_track_record, validate, write_track_record,
    EngineOptions, TrackBuild, ValidationError, ValidationOptions,
};

fn built_oval() -> TrackBuild {
    let input =
        parse_track_input(include_str!("fixtures/oval_track.json")).expect("Fixture sollte parsen");
    build_track(&input, &EngineOptions::default()).expect("Build fehlgeschlagen")
}

#[test]
fn test_json_roundtrip_preserves_counts_and_positions() {
    let build = built_oval();
    let json = write_track_record(&build.record).expect("JSON-Export fehlgeschlagen");
    let reparsed = parse_track_record(&json).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(build.record.chain.len(), reparsed.chain.len());
    assert_eq!(build.record.space_count(), reparsed.space_count());
    assert_eq!(build.record.corner_count(), reparsed.corner_count());
    assert_eq!(build.record.metadata.name, reparsed.metadata.name);
    assert_eq!(
        build.record.metadata.race_direction,
        reparsed.metadata.race_direction
    );

    for (a, b) in build.record.spaces.iter().zip(&reparsed.spaces) {
        assert_eq!(a.index, b.index);
        assert!(a.position.distance(b.position) < 1e-9);
        assert_eq!(a.spots.len(), b.spots.len());
        for (sa, sb) in a.spots.iter().zip(&b.spots) {
            assert_eq!(sa.spot_type, sb.spot_type);
            assert_eq!(sa.is_blocking, sb.is_blocking);
        }
    }
    for (a, b) in build.record.corners.iter().zip(&reparsed.corners) {
        assert_eq!(a.space_index, b.space_index);
        assert_eq!(a.speed_limit, b.speed_limit);
        assert_eq!(a.corner_type, b.corner_type);
        assert_eq!(a.inner_side, b.inner_side);
    }
}

#[test]
fn test_imported_record_revalidates_cleanly() {
    let options = EngineOptions::default();
    let json = write_track_record(&built_oval().record).expect("JSON-Export fehlgeschlagen");
    let reparsed = parse_track_record(&json).expect("Re-Parsing fehlgeschlagen");

    let rebuilt = TrackBuild::from_record(reparsed, &options);
    assert!(rebuilt.is_valid, "Fehler: {:?}", rebuilt.validation_errors);
}

#[test]
fn test_tampered_record_is_reported() {
    let mut record = built_oval().record;
    record.chain.closed = false;
    record.metadata.lap_count = 0;
    if let Some(corner) = record.corners.first_mut() {
        corner.speed_limit = 9;
    }

    let json = write_track_record(&record).expect("JSON-Export fehlgeschlagen");
    let reparsed = parse_track_record(&json).expect("Re-Parsing fehlgeschlagen");
    let errors = validate(&reparsed, &ValidationOptions::default());

    assert!(errors.contains(&ValidationError::NotClosed));
    assert!(errors.contains(&ValidationError::InvalidLapCount));
    assert!(errors
        .iter()
        .any(|e| matches!(e, ValidationError::SpeedLimitOutOfRange { speed_limit: 9, .. })));
}

#[test]
fn test_serialized_field_names() {
    let json = write_track_record(&built_oval().record).expect("JSON-Export fehlgeschlagen");
    assert!(json.contains("\"startFinishIndex\""));
    assert!(json.contains("\"spotType\": \"race-line\""));
    assert!(json.contains("\"isAutoSuggested\": true"));
    assert!(json.contains("\"raceDirection\": \"counterClockwise\""));

    let build_json = write_track_build(&built_oval()).expect("JSON-Export fehlgeschlagen");
    assert!(build_json.contains("\"isValid\": true"));
    assert!(build_json.contains("\"validationErrors\": []"));
}

#[test]
fn test_record_file_roundtrip() {
    use bezier_track_engine::json::{read_track_record, write_track_record_file};

    let record = built_oval().record;
    let path = std::env::temp_dir().join(format!("track_record_{}.json", std::process::id()));
    write_track_record_file(&record, &path).expect("Datei-Export fehlgeschlagen");
    let loaded = read_track_record(&path).expect("Datei-Import fehlgeschlagen");
    let _ = std::fs::remove_file(&path);

    assert_eq!(record.space_count(), loaded.space_count());
    assert_eq!(record.corner_count(), loaded.corner_count());
    assert!(read_track_record(&path).is_err());
}

#[test]
fn test_build_file_contains_validation_result() {
    use bezier_track_engine::json::write_track_build_file;

    let build = built_oval();
    let path = std::env::temp_dir().join(format!("track_build_{}.json", std::process::id()));
    write_track_build_file(&build, &path).expect("Datei-Export fehlgeschlagen");
    let content = std::fs::read_to_string(&path).expect("Datei sollte lesbar sein");
    let _ = std::fs::remove_file(&path);

    let value: serde_json::Value = serde_json::from_str(&content).expect("gültiges JSON erwartet");
    assert_eq!(value["isValid"], serde_json::Value::Bool(true));
    assert_eq!(value["validationErrors"], serde_json::json!([]));
    assert_eq!(
        value["record"]["spaces"].as_array().map(Vec::len),
        Some(build.record.space_count())
    );
}
