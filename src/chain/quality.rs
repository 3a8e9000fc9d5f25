//! Lesende Diagnose einer Kette (Länge, Krümmungsstatistik, Stetigkeit).

use super::continuity::{continuity_level, DEFAULT_CONTINUITY_TOLERANCE};
use crate::core::{Chain, Continuity};
use crate::geometry::{chain_length, DEFAULT_ARC_LENGTH_SAMPLES};
use serde::{Deserialize, Serialize};

/// Krümmungs-Abtastpunkte pro Segment.
const QUALITY_SAMPLES_PER_SEGMENT: usize = 20;

/// Ergebnis von [`analyze_quality`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainQuality {
    /// Gesamtlänge der Kette
    pub total_length: f64,
    /// Mittlere Krümmung über alle Abtastpunkte
    pub avg_curvature: f64,
    /// Größte abgetastete Krümmung
    pub max_curvature: f64,
    /// Standardabweichung der abgetasteten Krümmung
    pub curvature_variation: f64,
    /// Höchster kettenweit erfüllter Stetigkeitsgrad
    pub continuity_level: Continuity,
}

/// Analysiert eine Kette ohne sie zu verändern.
pub fn analyze_quality(chain: &Chain) -> ChainQuality {
    let curvatures: Vec<f64> = chain
        .segments
        .iter()
        .flat_map(|segment| {
            (0..=QUALITY_SAMPLES_PER_SEGMENT).map(move |i| {
                segment.curvature_at(i as f64 / QUALITY_SAMPLES_PER_SEGMENT as f64)
            })
        })
        .collect();

    let (avg_curvature, max_curvature, curvature_variation) = if curvatures.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let count = curvatures.len() as f64;
        let avg = curvatures.iter().sum::<f64>() / count;
        let max = curvatures.iter().copied().fold(0.0, f64::max);
        let variance = curvatures.iter().map(|k| (k - avg).powi(2)).sum::<f64>() / count;
        (avg, max, variance.sqrt())
    };

    ChainQuality {
        total_length: chain_length(chain, DEFAULT_ARC_LENGTH_SAMPLES),
        avg_curvature,
        max_curvature,
        curvature_variation,
        continuity_level: if chain.is_empty() {
            Continuity::C0
        } else {
            continuity_level(chain, DEFAULT_CONTINUITY_TOLERANCE)
        },
    }
}
