//! Diskretisierung: gleichmäßige Bogenlängen-Schritte entlang der Kette.
//!
//! Alle Spaces liegen per Konstruktion gleich weit auseinander
//! (Schritt = Gesamtlänge / Anzahl), nicht durch nachträgliche Korrektur.
//! Das garantiert gleiche Bewegungskosten pro Space.

mod spots;

pub use spots::{
    generate_spots, INNER_SLIPSTREAM, OUTER_SLIPSTREAM, RACE_LINE_SLIPSTREAM,
};

use crate::core::{Chain, Point, Space, SpaceMetadata};
use crate::geometry::{ArcLengthTable, DEGENERATE_EPSILON};

/// Standard-Anzahl Spots pro Space (ungerade → echter Mittel-Spot).
pub const DEFAULT_SPOTS_PER_SPACE: usize = 5;

/// Erzeugt `target_spaces_per_lap` Spaces mit je `spots_per_space` Spots.
///
/// Leere Ketten oder `target_spaces_per_lap == 0` liefern keine Spaces.
/// Die Plausibilität der Parameter prüft die Pipeline vorher.
pub fn discretize(
    chain: &Chain,
    target_spaces_per_lap: usize,
    track_width: f64,
    spots_per_space: usize,
    samples: usize,
) -> Vec<Space> {
    if chain.is_empty() || target_spaces_per_lap == 0 {
        return Vec::new();
    }

    let table = ArcLengthTable::new(chain, samples);
    let total = table.total_length();
    let step = total / target_spaces_per_lap as f64;

    let mut spaces = Vec::with_capacity(target_spaces_per_lap);
    for index in 0..target_spaces_per_lap {
        let distance = index as f64 * step;
        let Some(location) = table.locate(distance) else {
            break;
        };
        let segment = &chain.segments[location.segment_index];
        let position = segment.point_at(location.t);
        let direction =
            travel_direction(segment.tangent_at(location.t), segment.end - segment.start);
        if direction.is_none() {
            log::trace!("Space {}: degenerierte Tangente, Spots ohne Querversatz", index);
        }

        let signed_curvature = segment.signed_curvature_at(location.t);
        spaces.push(Space {
            id: index as u64,
            index,
            position,
            spots: generate_spots(index, position, direction, track_width, spots_per_space),
            metadata: SpaceMetadata {
                curvature: signed_curvature.abs(),
                signed_curvature,
                heading: direction.map_or(0.0, |d| d.y.atan2(d.x)),
                distance,
                segment_index: location.segment_index,
                t: location.t,
            },
        });
    }

    log::debug!(
        "Diskretisiert: {} Spaces, Schritt {:.3}, Länge {:.3}",
        spaces.len(),
        step,
        total
    );
    spaces
}

/// Normierte Fahrtrichtung; bei Null-Tangente die Sehne, sonst `None`.
fn travel_direction(tangent: Point, chord: Point) -> Option<Point> {
    [tangent, chord]
        .into_iter()
        .find(|v| v.length() > DEGENERATE_EPSILON)
        .map(|v| v.normalize())
}
