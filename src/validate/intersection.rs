//! Selbstüberschneidung nicht benachbarter Segmente.

use super::ValidationOptions;
use crate::core::{Chain, Point, Segment};
use serde::{Deserialize, Serialize};

/// Verfahren der Überschneidungs-Prüfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfIntersectionMode {
    /// Überlappung der Kontrollpunkt-Boxen (konservativ, Fehlalarme möglich)
    #[default]
    BoundingBox,
    /// Schnitt der abgetasteten Polylinien, Box-Vorfilter
    Polyline,
}

/// Alle Paare (i, j) mit i < j nicht benachbarter Segmente, die sich schneiden.
pub fn find_self_intersections(chain: &Chain, options: &ValidationOptions) -> Vec<(usize, usize)> {
    let tolerance = options.intersection_tolerance.max(0.0);
    let polylines: Vec<Vec<Point>> = match options.self_intersection {
        SelfIntersectionMode::BoundingBox => Vec::new(),
        SelfIntersectionMode::Polyline => chain
            .segments
            .iter()
            .map(|segment| flatten(segment, options.polyline_samples.max(1)))
            .collect(),
    };

    let n = chain.len();
    let mut hits = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if chain.are_adjacent(i, j) {
                continue;
            }
            let a = &chain.segments[i];
            let b = &chain.segments[j];
            if !boxes_overlap(a.control_bounds(), b.control_bounds(), tolerance) {
                continue;
            }
            let intersects = match options.self_intersection {
                SelfIntersectionMode::BoundingBox => true,
                SelfIntersectionMode::Polyline => {
                    polylines_intersect(&polylines[i], &polylines[j], tolerance)
                }
            };
            if intersects {
                log::trace!("Überschneidung: Segmente {} und {}", i, j);
                hits.push((i, j));
            }
        }
    }
    hits
}

/// Echte Überlappung; Berührung innerhalb `tolerance` zählt nicht.
fn boxes_overlap(a: (Point, Point), b: (Point, Point), tolerance: f64) -> bool {
    let (a_min, a_max) = a;
    let (b_min, b_max) = b;
    a_min.x < b_max.x - tolerance
        && b_min.x < a_max.x - tolerance
        && a_min.y < b_max.y - tolerance
        && b_min.y < a_max.y - tolerance
}

fn flatten(segment: &Segment, samples: usize) -> Vec<Point> {
    (0..=samples)
        .map(|i| segment.point_at(i as f64 / samples as f64))
        .collect()
}

fn polylines_intersect(a: &[Point], b: &[Point], tolerance: f64) -> bool {
    a.windows(2).any(|ea| {
        b.windows(2)
            .any(|eb| edges_cross(ea[0], ea[1], eb[0], eb[1], tolerance))
    })
}

/// Schnitt oder Berührung zweier Strecken (Orientierungstest).
///
/// Nicht benachbarte Segmente dürfen sich auch nicht berühren.
fn edges_cross(p1: Point, p2: Point, q1: Point, q2: Point, tolerance: f64) -> bool {
    let o1 = orientation(p1, p2, q1, tolerance);
    let o2 = orientation(p1, p2, q2, tolerance);
    let o3 = orientation(q1, q2, p1, tolerance);
    let o4 = orientation(q1, q2, p2, tolerance);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == 0 && within_box(p1, p2, q1, tolerance))
        || (o2 == 0 && within_box(p1, p2, q2, tolerance))
        || (o3 == 0 && within_box(q1, q2, p1, tolerance))
        || (o4 == 0 && within_box(q1, q2, p2, tolerance))
}

/// Seite von `c` relativ zu a→b: 1 links, -1 rechts, 0 auf der Geraden.
fn orientation(a: Point, b: Point, c: Point, tolerance: f64) -> i8 {
    let cross = (b - a).perp_dot(c - a);
    let eps = tolerance * (b - a).length().max(1.0);
    if cross > eps {
        1
    } else if cross < -eps {
        -1
    } else {
        0
    }
}

/// `c` liegt in der Box der Strecke a-b (für kollineare Punkte).
fn within_box(a: Point, b: Point, c: Point, tolerance: f64) -> bool {
    let min = a.min(b) - Point::splat(tolerance);
    let max = a.max(b) + Point::splat(tolerance);
    c.cmpge(min).all() && c.cmple(max).all()
}
