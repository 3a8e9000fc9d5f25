//! Kurven (Corners): Spaces mit Tempolimit und Innenseite.

use serde::{Deserialize, Serialize};

/// Seite quer zur Fahrtrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnerSide {
    /// Links in Fahrtrichtung (höhere Spot-Indizes)
    #[default]
    Left,
    /// Rechts in Fahrtrichtung
    Right,
}

/// Kurvenkategorie aus den Krümmungsbändern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerType {
    /// Enge Kurve, höchste Krümmung
    Slow,
    /// Mittlere Kurve
    Medium,
    /// Schnelle Kurve
    Fast,
    /// Schwach gekrümmter Wechsel
    Chicane,
}

/// Eine Kurve an einem Space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corner {
    /// Kurven-ID
    pub id: u64,
    /// Index des belegten Spaces (genau eine Kurve pro Space)
    pub space_index: usize,
    /// Tempolimit (gültig: 1..=6)
    pub speed_limit: u8,
    /// Innenseite für den Abschnitt bis zur nächsten Kurve
    pub inner_side: InnerSide,
    /// Kategorie
    pub corner_type: CornerType,
    /// Schwierigkeit 1..=5
    pub difficulty: u8,
    /// Empfohlener Gang
    pub suggested_gear: u8,
    /// Hitze-Strafe bei Überschreitung
    pub heat_penalty: u8,
    /// Einfahrtswinkel in Grad
    pub entry_angle: f64,
    /// Ausfahrtswinkel in Grad
    pub exit_angle: f64,
    /// Kurvenradius (1 / Krümmung)
    pub radius: f64,
    /// Vom Analyzer vorgeschlagen (false = manuell gesetzt)
    pub is_auto_suggested: bool,
}
