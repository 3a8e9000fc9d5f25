//! C1/C2-Angleichung an den Segment-Fugen.
//!
//! Reine Transformation: die Eingabekette bleibt unverändert, das Ergebnis
//! ist eine neue Kette. C1 wird in einem Durchlauf exakt hergestellt, C2 nur
//! iterativ angenähert. Auf geschlossenen Schleifen gibt es keine Garantie,
//! dass die C2-Iteration konvergiert; zurückgegeben wird der beste Stand.

use crate::core::{Chain, Continuity, Point, Segment};
use crate::geometry::DEGENERATE_EPSILON;
use serde::{Deserialize, Serialize};

/// Standard-Toleranz für Richtungs- und Krümmungsvergleiche an den Fugen.
pub const DEFAULT_CONTINUITY_TOLERANCE: f64 = 1e-3;

/// Einstellungen für [`enforce_continuity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuityOptions {
    /// Tangentenrichtung an den Fugen angleichen
    pub enforce_c1: bool,
    /// Krümmung an den Fugen annähern (impliziert C1)
    pub enforce_c2: bool,
    /// Toleranz (Richtungsdifferenz normierter Tangenten, relative Krümmungsdifferenz)
    pub tolerance: f64,
    /// Maximale Anzahl C2-Iterationen
    pub max_iterations: usize,
    /// Anteil der Korrektur pro C2-Iteration (0, 1]
    pub relaxation: f64,
}

impl Default for ContinuityOptions {
    fn default() -> Self {
        Self {
            enforce_c1: true,
            enforce_c2: false,
            tolerance: DEFAULT_CONTINUITY_TOLERANCE,
            max_iterations: 32,
            relaxation: 0.5,
        }
    }
}

/// Gleicht die Fugen der Kette an und stempelt den erreichten Stetigkeitsgrad.
pub fn enforce_continuity(chain: &Chain, options: &ContinuityOptions) -> Chain {
    let mut segments = chain.segments.clone();
    let joints = chain.joints();

    if options.enforce_c1 || options.enforce_c2 {
        apply_c1(&mut segments, &joints);
    }

    if options.enforce_c2 && !joints.is_empty() {
        let relaxation = options.relaxation.clamp(f64::EPSILON, 1.0);
        let mut best = segments.clone();
        let mut best_error = max_curvature_error(&segments, &joints);
        let mut converged = best_error <= 0.0;

        for iteration in 0..options.max_iterations {
            if joints
                .iter()
                .all(|&(p, n)| curvature_matches(&segments[p], &segments[n], options.tolerance))
            {
                converged = true;
                log::debug!("C2 nach {} Iterationen erreicht", iteration);
                break;
            }
            for &(prev, next) in &joints {
                nudge_c2(&mut segments, prev, next, relaxation);
            }
            apply_c1(&mut segments, &joints);

            let error = max_curvature_error(&segments, &joints);
            if error.is_finite() && error < best_error {
                best_error = error;
                best.clone_from(&segments);
            }
        }

        if !converged {
            log::warn!(
                "C2-Angleichung nicht konvergiert ({} Iterationen, max. Krümmungsfehler {:.3e})",
                options.max_iterations,
                best_error
            );
            segments = best;
        }
    }

    stamp_continuity(&mut segments, &joints, chain.closed, options.tolerance);
    Chain::new(segments, chain.closed)
}

/// Misst den Stetigkeitsgrad an der Fuge `prev` → `next`.
///
/// C0 ist die Untergrenze (gemeinsame Endpunkte werden vorausgesetzt).
pub fn measure_joint(prev: &Segment, next: &Segment, tolerance: f64) -> Continuity {
    let (Some(out_dir), Some(in_dir)) = (end_direction(prev), start_direction(next)) else {
        return Continuity::C0;
    };
    if (out_dir - in_dir).length() > tolerance {
        return Continuity::C0;
    }
    if curvature_matches(prev, next, tolerance) {
        Continuity::C2
    } else {
        Continuity::C1
    }
}

/// Höchster Stetigkeitsgrad, der an allen Fugen erfüllt ist.
///
/// Ketten ohne Fugen (leer oder ein offenes Segment) gelten als C2.
pub fn continuity_level(chain: &Chain, tolerance: f64) -> Continuity {
    chain
        .joints()
        .into_iter()
        .map(|(p, n)| measure_joint(&chain.segments[p], &chain.segments[n], tolerance))
        .min()
        .unwrap_or(Continuity::C2)
}

/// Normierte Austrittsrichtung; fällt bei Null-Handles auf die Sehne zurück.
fn end_direction(segment: &Segment) -> Option<Point> {
    [
        segment.end - segment.cp2,
        segment.end - segment.cp1,
        segment.end - segment.start,
    ]
    .into_iter()
    .find(|v| v.length() > DEGENERATE_EPSILON)
    .map(|v| v.normalize())
}

/// Normierte Eintrittsrichtung; fällt bei Null-Handles auf die Sehne zurück.
fn start_direction(segment: &Segment) -> Option<Point> {
    [
        segment.cp1 - segment.start,
        segment.cp2 - segment.start,
        segment.end - segment.start,
    ]
    .into_iter()
    .find(|v| v.length() > DEGENERATE_EPSILON)
    .map(|v| v.normalize())
}

fn apply_c1(segments: &mut [Segment], joints: &[(usize, usize)]) {
    for &(prev, next) in joints {
        let outgoing = segments[prev].end - segments[prev].cp2;
        let out_length = outgoing.length();
        let (direction, magnitude) = if out_length > DEGENERATE_EPSILON {
            (outgoing / out_length, out_length)
        } else {
            // Null-Handle am Vorgänger: Richtung aus der Sehne, eigene Länge behalten
            let Some(direction) = end_direction(&segments[prev]) else {
                continue;
            };
            let own = segments[next].cp1.distance(segments[next].start);
            let magnitude = if own > DEGENERATE_EPSILON {
                own
            } else {
                segments[next].start.distance(segments[next].end) / 3.0
            };
            (direction, magnitude)
        };
        let start = segments[next].start;
        segments[next].cp1 = start + direction * magnitude;
    }
}

/// Schiebt cp2 von `next` anteilig Richtung gleicher zweiter Ableitung an der Fuge.
fn nudge_c2(segments: &mut [Segment], prev: usize, next: usize, relaxation: f64) {
    let p = segments[prev];
    // B''(1) des Vorgängers / 6
    let bend = p.cp1 - 2.0 * p.cp2 + p.end;
    let n = &mut segments[next];
    let target = bend - n.start + 2.0 * n.cp1;
    n.cp2 += (target - n.cp2) * relaxation;
}

fn curvature_matches(prev: &Segment, next: &Segment, tolerance: f64) -> bool {
    let k_out = prev.signed_curvature_at(1.0);
    let k_in = next.signed_curvature_at(0.0);
    (k_out - k_in).abs() <= tolerance * k_out.abs().max(k_in.abs()) + DEGENERATE_EPSILON
}

fn max_curvature_error(segments: &[Segment], joints: &[(usize, usize)]) -> f64 {
    joints
        .iter()
        .map(|&(p, n)| {
            (segments[p].signed_curvature_at(1.0) - segments[n].signed_curvature_at(0.0)).abs()
        })
        .fold(0.0, f64::max)
}

fn stamp_continuity(
    segments: &mut [Segment],
    joints: &[(usize, usize)],
    closed: bool,
    tolerance: f64,
) {
    if !closed {
        if let Some(first) = segments.first_mut() {
            first.continuity = Continuity::C0;
        }
    }
    for &(prev, next) in joints {
        segments[next].continuity = measure_joint(&segments[prev], &segments[next], tolerance);
    }
}
