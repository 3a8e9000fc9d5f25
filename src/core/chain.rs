//! Bézier-Kette: geordnete Liste kubischer Segmente mit gemeinsamen Endpunkten.

use super::Point;
use crate::geometry::bezier;
use serde::{Deserialize, Serialize};

/// Stetigkeitsgrad an einer Segment-Fuge (C0 < C1 < C2).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Continuity {
    /// Nur Positionsgleichheit
    #[default]
    C0,
    /// Zusätzlich gleiche Tangentenrichtung
    C1,
    /// Zusätzlich gleiche Krümmung
    C2,
}

/// Ein kubisches Bézier-Stück der Kette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Laufende Segment-ID (entspricht dem Index in der Kette)
    pub id: u64,
    /// Startpunkt (P0)
    pub start: Point,
    /// Endpunkt (P3)
    pub end: Point,
    /// Erster Steuerpunkt (ausgehendes Handle des Startpunkts)
    pub cp1: Point,
    /// Zweiter Steuerpunkt (eingehendes Handle des Endpunkts)
    pub cp2: Point,
    /// Stetigkeit am Segment-Start gegenüber dem Vorgänger (nur Metadaten)
    #[serde(default)]
    pub continuity: Continuity,
}

impl Segment {
    /// Erstellt ein Segment aus den vier Bézier-Punkten.
    pub fn new(id: u64, start: Point, cp1: Point, cp2: Point, end: Point) -> Self {
        Self {
            id,
            start,
            end,
            cp1,
            cp2,
            continuity: Continuity::C0,
        }
    }

    /// Position bei Parameter t.
    pub fn point_at(&self, t: f64) -> Point {
        bezier::cubic_bezier(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Erste Ableitung (nicht normiert) bei Parameter t.
    pub fn tangent_at(&self, t: f64) -> Point {
        bezier::cubic_bezier_tangent(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Zweite Ableitung bei Parameter t.
    pub fn second_derivative_at(&self, t: f64) -> Point {
        bezier::cubic_bezier_second_derivative(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Betrag der Krümmung bei Parameter t (0 bei Null-Tangente).
    pub fn curvature_at(&self, t: f64) -> f64 {
        bezier::curvature(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Vorzeichenbehaftete Krümmung (positiv = Linkskurve).
    pub fn signed_curvature_at(&self, t: f64) -> f64 {
        bezier::signed_curvature(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Achsparallele Bounding-Box der vier Kontrollpunkte als (min, max).
    ///
    /// Die Kurve liegt in der konvexen Hülle, die Box ist also konservativ.
    pub fn control_bounds(&self) -> (Point, Point) {
        let min = self.start.min(self.cp1).min(self.cp2).min(self.end);
        let max = self.start.max(self.cp1).max(self.cp2).max(self.end);
        (min, max)
    }
}

/// Geordnete Segmentliste, optional geschlossen.
///
/// Geschlossen: `segments[i].end == segments[(i + 1) % n].start` inkl. Umlauf.
/// Offen: N-1 Segmente über N Punkte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Segmente in Fahrtrichtung
    pub segments: Vec<Segment>,
    /// true = geschlossene Schleife
    pub closed: bool,
}

impl Chain {
    /// Erstellt eine Kette aus fertigen Segmenten.
    pub fn new(segments: Vec<Segment>, closed: bool) -> Self {
        Self { segments, closed }
    }

    /// Leere (degenerierte) Kette ohne Geometrie.
    pub fn empty(closed: bool) -> Self {
        Self {
            segments: Vec::new(),
            closed,
        }
    }

    /// Anzahl Segmente.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// true wenn keine Geometrie vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index des Nachfolgers von Segment `index` (None am Ende einer offenen Kette).
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let n = self.segments.len();
        if index + 1 < n {
            Some(index + 1)
        } else if self.closed && n > 0 {
            Some(0)
        } else {
            None
        }
    }

    /// Paare (vorher, nachher) aller inneren Fugen; bei geschlossener Kette inkl. Umlauf.
    pub fn joints(&self) -> Vec<(usize, usize)> {
        (0..self.segments.len())
            .filter_map(|i| self.next_index(i).map(|next| (i, next)))
            .filter(|&(prev, next)| prev != next)
            .collect()
    }

    /// true wenn zwei Segmente eine gemeinsame Fuge haben (inkl. Umlauf).
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        a == b || self.next_index(a) == Some(b) || self.next_index(b) == Some(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn line(id: u64, a: Point, b: Point) -> Segment {
        Segment::new(id, a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b)
    }

    fn square(closed: bool) -> Chain {
        let p = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        let count = if closed { 4 } else { 3 };
        let segments = (0..count)
            .map(|i| line(i as u64, p[i], p[(i + 1) % 4]))
            .collect();
        Chain::new(segments, closed)
    }

    #[test]
    fn test_joints_and_adjacency_follow_closure() {
        let closed = square(true);
        assert_eq!(closed.joints(), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(closed.are_adjacent(3, 0));
        assert!(!closed.are_adjacent(0, 2));

        let open = square(false);
        assert_eq!(open.joints(), vec![(0, 1), (1, 2)]);
        assert_eq!(open.next_index(2), None);
        assert!(!open.are_adjacent(2, 0));
    }

    #[test]
    fn test_linear_segment_has_no_second_derivative() {
        let segment = line(0, DVec2::ZERO, DVec2::new(9.0, 3.0));
        assert!(segment.second_derivative_at(0.3).length() < 1e-9);
        assert!(segment.curvature_at(0.3) < 1e-9);
        let (min, max) = segment.control_bounds();
        assert_eq!(min, DVec2::ZERO);
        assert_eq!(max, DVec2::new(9.0, 3.0));
    }
}
