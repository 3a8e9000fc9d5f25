//! Laterale Spot-Aufteilung eines Spaces.

use crate::core::{Point, Spot, SpotType};

/// Windschatten-Wert der äußeren (blockierenden) Spots.
pub const OUTER_SLIPSTREAM: f64 = 1.0;
/// Windschatten-Wert der Ideallinie.
pub const RACE_LINE_SLIPSTREAM: f64 = 0.5;
/// Windschatten-Wert der inneren Spots.
pub const INNER_SLIPSTREAM: f64 = 0.5;

/// Verteilt `spots_per_space` Spots gleichmäßig über [-w/2, +w/2].
///
/// Die Querachse ist die Linksdrehung der Fahrtrichtung, Spot 0 liegt also
/// am rechten Rand. Der Spot mit Index n/2 ist die Ideallinie (bei gerader
/// Anzahl nicht exakt mittig), die beiden Randspots sind äußere Spots.
/// Ohne Fahrtrichtung liegen alle Spots auf `centre`.
pub fn generate_spots(
    space_index: usize,
    centre: Point,
    direction: Option<Point>,
    track_width: f64,
    spots_per_space: usize,
) -> Vec<Spot> {
    let n = spots_per_space;
    let lateral = direction
        .map(|d| d.normalize_or_zero().perp())
        .unwrap_or(Point::ZERO);
    let race_line_index = n / 2;
    let half_width = track_width * 0.5;

    (0..n)
        .map(|j| {
            let offset = if n > 1 {
                -half_width + track_width * j as f64 / (n - 1) as f64
            } else {
                0.0
            };
            let spot_type = if j == race_line_index {
                SpotType::RaceLine
            } else if j == 0 || j == n - 1 {
                SpotType::Outer
            } else {
                SpotType::Inner
            };
            let slipstream_value = match spot_type {
                SpotType::Outer => OUTER_SLIPSTREAM,
                SpotType::RaceLine => RACE_LINE_SLIPSTREAM,
                SpotType::Inner => INNER_SLIPSTREAM,
            };
            Spot {
                id: (space_index * n + j) as u64,
                position: centre + lateral * offset,
                spot_type,
                spot_index: j as u32,
                is_blocking: spot_type == SpotType::Outer,
                slipstream_value,
            }
        })
        .collect()
}
