//! Kurven-Analyse: automatische Platzierung aus der Krümmung der Spaces.
//!
//! Gierige Packung: Kandidaten oberhalb der Schwelle werden absteigend nach
//! Krümmung angenommen, sofern kein bereits angenommener Kandidat näher als
//! `min_corner_spacing` Space-Indizes (zirkulär) liegt. Kein globales
//! Optimum, dafür O(n log n).

mod heuristics;

pub use heuristics::{CornerHeuristicConfig, SpeedFormula, MAX_SPEED_LIMIT, MIN_SPEED_LIMIT};

use crate::core::{Corner, InnerSide, Space};

/// Standard-Krümmungsschwelle für Kurven-Vorschläge.
pub const DEFAULT_CURVATURE_THRESHOLD: f64 = 0.01;
/// Standard-Mindestabstand zwischen zwei Kurven (Space-Indizes).
pub const DEFAULT_MIN_CORNER_SPACING: usize = 4;

/// Schlägt Kurven an den stärksten Krümmungsmaxima vor.
///
/// Ergebnis ist nach `space_index` sortiert, IDs laufen in dieser Reihenfolge.
pub fn auto_suggest_corners(
    spaces: &[Space],
    curvature_threshold: f64,
    min_corner_spacing: usize,
    heuristics: &CornerHeuristicConfig,
) -> Vec<Corner> {
    let n = spaces.len();
    let mut candidates: Vec<(usize, f64)> = spaces
        .iter()
        .enumerate()
        .map(|(index, space)| (index, space.metadata.curvature))
        .filter(|&(_, curvature)| curvature > curvature_threshold)
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut accepted: Vec<usize> = Vec::new();
    for (index, _) in candidates {
        if accepted
            .iter()
            .all(|&other| circular_distance(index, other, n) >= min_corner_spacing)
        {
            accepted.push(index);
        }
    }
    accepted.sort_unstable();

    let mut corners: Vec<Corner> = accepted
        .into_iter()
        .enumerate()
        .filter_map(|(id, space_index)| derive_corner(id as u64, space_index, spaces, heuristics))
        .collect();
    assign_inner_sides(&mut corners, spaces);

    log::debug!(
        "Kurven-Vorschlag: {} Kurven (Schwelle {:.4}, Abstand {})",
        corners.len(),
        curvature_threshold,
        min_corner_spacing
    );
    corners
}

/// Leitet eine vorgeschlagene Kurve an `space_index` aus dessen Metadaten ab.
///
/// Die Innenseite ist vorläufig und wird von [`assign_inner_sides`] gesetzt.
/// `None` wenn `space_index` außerhalb der Spaces liegt.
pub fn derive_corner(
    id: u64,
    space_index: usize,
    spaces: &[Space],
    heuristics: &CornerHeuristicConfig,
) -> Option<Corner> {
    let n = spaces.len();
    let space = spaces.get(space_index)?;
    let curvature = space.metadata.curvature;
    let corner_type = heuristics.classify(curvature);
    let speed_limit = heuristics.speed_limit(corner_type, curvature);
    let entry = &spaces[(space_index + n - 1) % n];
    let exit = &spaces[(space_index + 1) % n];

    Some(Corner {
        id,
        space_index,
        speed_limit,
        inner_side: if space.metadata.signed_curvature < 0.0 {
            InnerSide::Right
        } else {
            InnerSide::Left
        },
        corner_type,
        difficulty: heuristics.difficulty(curvature, speed_limit),
        suggested_gear: heuristics.suggested_gear(speed_limit),
        heat_penalty: heuristics.heat_penalty(speed_limit),
        entry_angle: entry.metadata.heading.to_degrees(),
        exit_angle: exit.metadata.heading.to_degrees(),
        radius: heuristics.radius(curvature),
        is_auto_suggested: true,
    })
}

/// Setzt die Innenseite jeder Kurve für den Abschnitt bis zur nächsten Kurve.
///
/// Ring-Topologie über die nach `space_index` sortierten Kurven: die Summe der
/// vorzeichenbehafteten Krümmung von der Kurve (inklusive) bis zur nächsten
/// (exklusive) entscheidet. Bei nur einer Kurve zählt die ganze Runde.
/// Kurven mit ungültigem Index bleiben unverändert.
pub fn assign_inner_sides(corners: &mut [Corner], spaces: &[Space]) {
    let n = spaces.len();
    if n == 0 || corners.is_empty() {
        return;
    }

    let mut order: Vec<usize> = (0..corners.len())
        .filter(|&i| corners[i].space_index < n)
        .collect();
    order.sort_by_key(|&i| corners[i].space_index);

    for (k, &i) in order.iter().enumerate() {
        let from = corners[i].space_index;
        let to = corners[order[(k + 1) % order.len()]].space_index;
        let span = match (to + n - from) % n {
            0 => n,
            span => span,
        };
        let turn: f64 = (0..span)
            .map(|offset| spaces[(from + offset) % n].metadata.signed_curvature)
            .sum();
        corners[i].inner_side = if turn < 0.0 {
            InnerSide::Right
        } else {
            InnerSide::Left
        };
    }
}

/// Fügt eine (z.B. manuell gesetzte) Kurve ein und gibt die neue Liste zurück.
///
/// Eine vorhandene Kurve am selben Space wird ersetzt. Die Liste wird nach
/// `space_index` sortiert, neu nummeriert und die Innenseiten neu bestimmt.
pub fn insert_corner(corners: &[Corner], corner: Corner, spaces: &[Space]) -> Vec<Corner> {
    let mut result: Vec<Corner> = corners
        .iter()
        .filter(|c| c.space_index != corner.space_index)
        .cloned()
        .collect();
    result.push(corner);
    result.sort_by_key(|c| c.space_index);
    for (id, c) in result.iter_mut().enumerate() {
        c.id = id as u64;
    }
    assign_inner_sides(&mut result, spaces);
    result
}

/// Kürzester Abstand zweier Indizes auf einem Ring der Länge `n`.
pub fn circular_distance(a: usize, b: usize, n: usize) -> usize {
    let d = a.abs_diff(b);
    if n == 0 {
        d
    } else {
        let d = d % n;
        d.min(n - d)
    }
}

#[cfg(test)]
mod tests;
