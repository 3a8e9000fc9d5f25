use super::{Chain, Corner, Space};
use serde::{Deserialize, Serialize};

/// Fahrtrichtung des Rennens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RaceDirection {
    /// Im Uhrzeigersinn
    Clockwise,
    /// Gegen den Uhrzeigersinn
    #[default]
    CounterClockwise,
}

/// Parameter des Diskretisierungs-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscretizationParams {
    /// Anzahl Spaces pro Runde (≥ 3)
    pub target_spaces_per_lap: usize,
    /// Fahrbahnbreite (> 0)
    pub track_width: f64,
    /// Spots pro Space (≥ 3, ungerade bevorzugt)
    pub spots_per_space: usize,
    /// Abtastdichte der Bogenlängen-Integration
    #[serde(default = "default_arc_length_samples")]
    pub arc_length_samples: usize,
}

fn default_arc_length_samples() -> usize {
    crate::geometry::DEFAULT_ARC_LENGTH_SAMPLES
}

impl Default for DiscretizationParams {
    fn default() -> Self {
        Self {
            target_spaces_per_lap: 48,
            track_width: 40.0,
            spots_per_space: 5,
            arc_length_samples: default_arc_length_samples(),
        }
    }
}

/// Skalare Strecken-Metadaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMetadata {
    /// Anzeigename (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Anzahl Runden
    pub lap_count: u32,
    /// Index des Start/Ziel-Spaces
    pub start_finish_index: usize,
    /// Fahrtrichtung
    pub race_direction: RaceDirection,
    /// Parameter, mit denen die Spaces erzeugt wurden
    pub discretization: DiscretizationParams,
}

impl Default for TrackMetadata {
    fn default() -> Self {
        Self {
            name: None,
            lap_count: 3,
            start_finish_index: 0,
            race_direction: RaceDirection::default(),
            discretization: DiscretizationParams::default(),
        }
    }
}

/// Vollständige Strecke: Geometrie und Spiel-Metadaten zusammen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    /// Bézier-Kette der Mittellinie
    pub chain: Chain,
    /// Gleichmäßig verteilte Spaces
    pub spaces: Vec<Space>,
    /// Kurven, sortiert nach `space_index`
    pub corners: Vec<Corner>,
    /// Skalare Metadaten
    pub metadata: TrackMetadata,
}

impl TrackRecord {
    /// Anzahl Spaces.
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// Anzahl Kurven.
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Kurve an einem Space, falls vorhanden.
    pub fn corner_at(&self, space_index: usize) -> Option<&Corner> {
        self.corners.iter().find(|c| c.space_index == space_index)
    }
}
