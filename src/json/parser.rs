//! Parser für Strecken-JSON.

use crate::core::TrackRecord;
use crate::pipeline::TrackInput;
use anyhow::{Context, Result};
use std::path::Path;

/// Parsed eine Strecken-Eingabe aus einem JSON-String.
pub fn parse_track_input(json_content: &str) -> Result<TrackInput> {
    let input: TrackInput =
        serde_json::from_str(json_content).context("Strecken-Eingabe ist kein gültiges JSON")?;
    log::debug!(
        "Eingabe gelesen: {} Kontrollpunkte, geschlossen: {}",
        input.control_points.len(),
        input.closed
    );
    Ok(input)
}

/// Parsed eine fertige Strecke aus einem JSON-String.
///
/// Die Struktur wird nicht geprüft, dafür gibt es `validate`.
pub fn parse_track_record(json_content: &str) -> Result<TrackRecord> {
    let record: TrackRecord =
        serde_json::from_str(json_content).context("Strecke ist kein gültiges JSON")?;
    log::debug!(
        "Strecke gelesen: {} Segmente, {} Spaces, {} Kurven",
        record.chain.len(),
        record.space_count(),
        record.corner_count()
    );
    Ok(record)
}

/// Liest eine Strecken-Eingabe aus einer Datei.
pub fn read_track_input(path: &Path) -> Result<TrackInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Eingabe nicht lesbar: {}", path.display()))?;
    parse_track_input(&content).with_context(|| format!("Fehler in {}", path.display()))
}

/// Liest eine fertige Strecke aus einer Datei.
pub fn read_track_record(path: &Path) -> Result<TrackRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Strecke nicht lesbar: {}", path.display()))?;
    parse_track_record(&content).with_context(|| format!("Fehler in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_parse_minimal_input() {
        let json = r#"{
            "controlPoints": [
                {"position": [0.0, 0.0]},
                {"position": [100.0, 0.0], "handleIn": [80.0, -10.0], "handleOut": [120.0, 10.0]},
                {"position": [50.0, 80.0]}
            ],
            "params": {"targetSpacesPerLap": 24, "trackWidth": 12.5}
        }"#;
        let input = parse_track_input(json).expect("Eingabe sollte parsen");
        assert_eq!(input.control_points.len(), 3);
        assert!(input.closed);
        assert_eq!(input.params.spots_per_space, 5);
        assert_eq!(input.control_points[1].handle_in, Some(DVec2::new(80.0, -10.0)));
        assert_eq!(input.control_points[0].handle_out, None);
        assert_eq!(input.lap_count, None);
    }

    #[test]
    fn test_parse_input_rejects_missing_params() {
        let json = r#"{"controlPoints": [], "closed": true}"#;
        assert!(parse_track_input(json).is_err());
    }

    #[test]
    fn test_parse_record_rejects_garbage() {
        let err = parse_track_record("{ kein json").unwrap_err();
        assert!(format!("{:#}", err).contains("Strecke"));
    }
}
