//! Heuristische Ableitung der Kurven-Attribute aus der Krümmung.
//!
//! Alle Koeffizienten sind Tuning-Werte, keine physikalischen Größen. Sie
//! werden als `CornerHeuristicConfig` injiziert und können per TOML
//! überschrieben werden.

use crate::core::CornerType;
use serde::{Deserialize, Serialize};

/// Kleinstes gültiges Tempolimit.
pub const MIN_SPEED_LIMIT: u8 = 1;
/// Größtes gültiges Tempolimit.
pub const MAX_SPEED_LIMIT: u8 = 6;

/// Lineare Tempoformel `base − slope·κ`, nach unten begrenzt auf `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedFormula {
    /// Tempo bei Krümmung 0
    pub base: f64,
    /// Abzug pro Krümmungseinheit
    pub slope: f64,
    /// Untergrenze für diesen Kurventyp
    pub min: u8,
}

impl SpeedFormula {
    /// Gerundetes Tempolimit, begrenzt auf [`min`, MAX_SPEED_LIMIT].
    pub fn evaluate(&self, curvature: f64) -> u8 {
        let raw = (self.base - self.slope * curvature).round();
        let min = self.min.clamp(MIN_SPEED_LIMIT, MAX_SPEED_LIMIT);
        raw.clamp(f64::from(min), f64::from(MAX_SPEED_LIMIT)) as u8
    }
}

/// Koeffizienten der Kurven-Heuristik.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerHeuristicConfig {
    // ── Krümmungsbänder ─────────────────────────────────────────
    /// Ab dieser Krümmung: langsame Kurve
    pub slow_min_curvature: f64,
    /// Ab dieser Krümmung: mittlere Kurve
    pub medium_min_curvature: f64,
    /// Ab dieser Krümmung: schnelle Kurve, darunter Schikane
    pub fast_min_curvature: f64,

    // ── Schwierigkeit ───────────────────────────────────────────
    /// Gewicht der normierten Krümmung
    pub difficulty_curvature_weight: f64,
    /// Gewicht des Tempo-Defizits
    pub difficulty_speed_weight: f64,
    /// Krümmung, ab der der Krümmungsanteil voll zählt
    pub difficulty_reference_curvature: f64,

    // ── Gang / Hitze / Radius ──────────────────────────────────
    /// Tempo-Obergrenzen für Gang 1, 2 und 3 (darüber Gang 4)
    pub gear_speed_limits: [u8; 3],
    /// Hitze-Strafe pro fehlender Tempostufe unter dem Maximum
    pub heat_per_speed_step: f64,
    /// Radius-Ersatzwert bei Krümmung ≈ 0
    pub straight_radius: f64,
    /// Unterhalb dieser Krümmung gilt der Abschnitt als gerade
    pub straight_curvature: f64,

    // ── Tempoformeln ────────────────────────────────────────────
    /// Tempoformel langsamer Kurven
    pub slow_speed: SpeedFormula,
    /// Tempoformel mittlerer Kurven
    pub medium_speed: SpeedFormula,
    /// Tempoformel schneller Kurven
    pub fast_speed: SpeedFormula,
    /// Tempoformel für Schikanen
    pub chicane_speed: SpeedFormula,
}

impl Default for CornerHeuristicConfig {
    fn default() -> Self {
        Self {
            slow_min_curvature: 0.04,
            medium_min_curvature: 0.02,
            fast_min_curvature: 0.01,

            slow_speed: SpeedFormula {
                base: 3.0,
                slope: 25.0,
                min: 1,
            },
            medium_speed: SpeedFormula {
                base: 4.0,
                slope: 50.0,
                min: 2,
            },
            fast_speed: SpeedFormula {
                base: 6.0,
                slope: 100.0,
                min: 3,
            },
            chicane_speed: SpeedFormula {
                base: 5.0,
                slope: 100.0,
                min: 3,
            },

            difficulty_curvature_weight: 0.6,
            difficulty_speed_weight: 0.4,
            difficulty_reference_curvature: 0.05,

            gear_speed_limits: [2, 3, 4],
            heat_per_speed_step: 0.5,
            straight_radius: 1.0e6,
            straight_curvature: 1.0e-6,
        }
    }
}

impl CornerHeuristicConfig {
    /// Kurventyp aus den Krümmungsbändern.
    pub fn classify(&self, curvature: f64) -> CornerType {
        if curvature >= self.slow_min_curvature {
            CornerType::Slow
        } else if curvature >= self.medium_min_curvature {
            CornerType::Medium
        } else if curvature >= self.fast_min_curvature {
            CornerType::Fast
        } else {
            CornerType::Chicane
        }
    }

    /// Tempolimit nach der typspezifischen Formel.
    pub fn speed_limit(&self, corner_type: CornerType, curvature: f64) -> u8 {
        let formula = match corner_type {
            CornerType::Slow => self.slow_speed,
            CornerType::Medium => self.medium_speed,
            CornerType::Fast => self.fast_speed,
            CornerType::Chicane => self.chicane_speed,
        };
        formula.evaluate(curvature)
    }

    /// Schwierigkeit 1..=5 aus Krümmung und Tempo-Defizit.
    pub fn difficulty(&self, curvature: f64, speed_limit: u8) -> u8 {
        let reference = self.difficulty_reference_curvature.max(f64::EPSILON);
        let curvature_part = (curvature / reference).clamp(0.0, 1.0);
        let shortfall = f64::from(MAX_SPEED_LIMIT.saturating_sub(speed_limit))
            / f64::from(MAX_SPEED_LIMIT - MIN_SPEED_LIMIT);
        let blend = self.difficulty_curvature_weight * curvature_part
            + self.difficulty_speed_weight * shortfall.clamp(0.0, 1.0);
        (1.0 + 4.0 * blend).round().clamp(1.0, 5.0) as u8
    }

    /// Empfohlener Gang 1..=4.
    pub fn suggested_gear(&self, speed_limit: u8) -> u8 {
        let position = self
            .gear_speed_limits
            .iter()
            .position(|&limit| speed_limit <= limit)
            .unwrap_or(self.gear_speed_limits.len());
        position as u8 + 1
    }

    /// Hitze-Strafe für das Überschreiten des Limits.
    pub fn heat_penalty(&self, speed_limit: u8) -> u8 {
        let steps = f64::from(MAX_SPEED_LIMIT.saturating_sub(speed_limit));
        (self.heat_per_speed_step * steps).round().max(0.0) as u8
    }

    /// Kurvenradius, bei Krümmung ≈ 0 der Ersatzwert.
    pub fn radius(&self, curvature: f64) -> f64 {
        if curvature.abs() < self.straight_curvature {
            self.straight_radius
        } else {
            1.0 / curvature.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_classify_bands_descend_with_curvature() {
        let config = CornerHeuristicConfig::default();
        assert_eq!(config.classify(0.1), CornerType::Slow);
        assert_eq!(config.classify(0.03), CornerType::Medium);
        assert_eq!(config.classify(0.015), CornerType::Fast);
        assert_eq!(config.classify(0.005), CornerType::Chicane);
    }

    #[test]
    fn test_speed_limit_is_floor_clamped_per_type() {
        let config = CornerHeuristicConfig::default();
        assert_eq!(config.speed_limit(CornerType::Slow, 10.0), 1);
        assert_eq!(config.speed_limit(CornerType::Medium, 10.0), 2);
        assert_eq!(config.speed_limit(CornerType::Fast, 10.0), 3);
        assert_eq!(config.speed_limit(CornerType::Fast, 0.0), 6);
    }

    #[test]
    fn test_speed_limit_never_exceeds_maximum() {
        let formula = SpeedFormula {
            base: 12.0,
            slope: 1.0,
            min: 9,
        };
        assert_eq!(formula.evaluate(0.0), MAX_SPEED_LIMIT);
    }

    #[test]
    fn test_difficulty_grows_with_curvature() {
        let config = CornerHeuristicConfig::default();
        let easy = config.difficulty(0.011, 5);
        let hard = config.difficulty(0.08, 1);
        assert!(easy < hard);
        assert_eq!(hard, 5);
        assert!((1..=5).contains(&easy));
    }

    #[test]
    fn test_gear_and_heat_follow_speed_limit() {
        let config = CornerHeuristicConfig::default();
        assert_eq!(config.suggested_gear(1), 1);
        assert_eq!(config.suggested_gear(3), 2);
        assert_eq!(config.suggested_gear(4), 3);
        assert_eq!(config.suggested_gear(6), 4);
        assert_eq!(config.heat_penalty(6), 0);
        assert_eq!(config.heat_penalty(2), 2);
    }

    #[test]
    fn test_radius_substitutes_straight_value() {
        let config = CornerHeuristicConfig::default();
        assert_relative_eq!(config.radius(0.02), 50.0);
        assert_eq!(config.radius(0.0), config.straight_radius);
    }
}
