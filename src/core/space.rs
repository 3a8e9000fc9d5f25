//! Spaces (gleichmäßig verteilte Positionen) und Spots (laterale Unterpositionen).

use super::Point;
use serde::{Deserialize, Serialize};

/// Rolle eines Spots quer zur Fahrbahn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpotType {
    /// Ideallinie (Mittellinie), genau einer pro Space
    RaceLine,
    /// Äußerster Spot, blockierend, höchster Windschatten-Wert
    Outer,
    /// Zwischen Ideallinie und Rand, nicht blockierend
    Inner,
}

/// Laterale Unterposition eines Spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Global eindeutige Spot-ID
    pub id: u64,
    /// Position in der Ebene
    pub position: Point,
    /// Rolle des Spots
    pub spot_type: SpotType,
    /// Index quer zur Fahrbahn (0 = rechter Rand)
    pub spot_index: u32,
    /// Blockiert nachfolgende Fahrzeuge
    pub is_blocking: bool,
    /// Windschatten-Wert
    pub slipstream_value: f64,
}

/// Aus der Mittellinie abgeleitete Metadaten eines Spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMetadata {
    /// Betrag der Krümmung an der Mittellinie (≥ 0)
    pub curvature: f64,
    /// Vorzeichenbehaftete Krümmung (positiv = Linkskurve)
    #[serde(default)]
    pub signed_curvature: f64,
    /// Fahrtrichtung in Radiant
    #[serde(default)]
    pub heading: f64,
    /// Bogenlänge ab Ursprung der Kette
    #[serde(default)]
    pub distance: f64,
    /// Segment, in dem der Space liegt
    #[serde(default)]
    pub segment_index: usize,
    /// Bézier-Parameter innerhalb des Segments
    #[serde(default)]
    pub t: f64,
}

/// Eine diskrete Position auf der Strecke (Bewegungseinheit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Space-ID
    pub id: u64,
    /// Rang in Bogenlängen-Reihenfolge ab Punkt 0
    pub index: usize,
    /// Position auf der Mittellinie
    pub position: Point,
    /// Laterale Spots quer zur Fahrbahn
    pub spots: Vec<Spot>,
    /// Abgeleitete Metadaten
    pub metadata: SpaceMetadata,
}

impl Space {
    /// Der Ideallinien-Spot, falls genau einer vorhanden ist.
    pub fn race_line_spot(&self) -> Option<&Spot> {
        let mut race_lines = self
            .spots
            .iter()
            .filter(|spot| spot.spot_type == SpotType::RaceLine);
        match (race_lines.next(), race_lines.next()) {
            (Some(spot), None) => Some(spot),
            _ => None,
        }
    }

    /// Anzahl der Ideallinien-Spots.
    pub fn race_line_count(&self) -> usize {
        self.spots
            .iter()
            .filter(|spot| spot.spot_type == SpotType::RaceLine)
            .count()
    }
}
