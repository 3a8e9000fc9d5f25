//! Automatische Handles nach Catmull-Rom für reine Punktlisten.
//!
//! Ein Catmull-Rom-Stück von p1 nach p2 ist identisch mit dem kubischen
//! Bézier-Stück mit cp1 = p1 + (p2 − p0)/6 und cp2 = p2 − (p3 − p1)/6.
//! Daraus ergeben sich die Handles jedes Punkts aus seinen beiden Nachbarn.

use crate::core::{ControlPoint, Point};

/// Erzeugt Kontrollpunkte mit Catmull-Rom-Handles.
///
/// `tension` skaliert die Handle-Länge (1.0 = klassischer Catmull-Rom).
/// Bei offenen Ketten werden an den Rändern Phantom-Punkte gespiegelt,
/// damit die Kurve natürlich durch den ersten und letzten Punkt läuft.
pub fn auto_handles(points: &[Point], closed: bool, tension: f64) -> Vec<ControlPoint> {
    let n = points.len();
    if n < 2 {
        return points.iter().copied().map(ControlPoint::from).collect();
    }

    (0..n)
        .map(|i| {
            let p = points[i];
            let prev = if i > 0 {
                points[i - 1]
            } else if closed {
                points[n - 1]
            } else {
                2.0 * points[0] - points[1]
            };
            let next = if i + 1 < n {
                points[i + 1]
            } else if closed {
                points[0]
            } else {
                2.0 * points[n - 1] - points[n - 2]
            };

            // Catmull-Rom-Tangente (next − prev)/2, Bézier-Handle = Tangente/3
            let offset = (next - prev) * (tension / 6.0);
            ControlPoint::with_handles(p, p - offset, p + offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::points_to_chain;
    use crate::core::Continuity;
    use glam::DVec2;

    /// Catmull-Rom-Auswertung von p1 nach p2 als Referenz.
    fn catmull_rom_reference(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        0.5 * ((2.0 * p1)
            + (p2 - p0) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (3.0 * (p1 - p2) + p3 - p0) * t3)
    }

    fn square() -> Vec<Point> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
            DVec2::new(100.0, 100.0),
            DVec2::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_closed_auto_handles_match_catmull_rom() {
        let points = square();
        let chain = points_to_chain(&auto_handles(&points, true, 1.0), true, Continuity::C1);

        for (i, segment) in chain.segments.iter().enumerate() {
            let n = points.len();
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];
            for step in 0..=8 {
                let t = step as f64 / 8.0;
                let expected = catmull_rom_reference(p0, p1, p2, p3, t);
                assert!(
                    (segment.point_at(t) - expected).length() < 1e-9,
                    "Segment {i} weicht bei t={t} ab"
                );
            }
        }
    }

    #[test]
    fn test_handles_are_symmetric_around_point() {
        for cp in auto_handles(&square(), true, 0.7) {
            let handle_in = cp.handle_in.expect("Handle erwartet");
            let handle_out = cp.handle_out.expect("Handle erwartet");
            assert!(((handle_in + handle_out) * 0.5 - cp.position).length() < 1e-12);
        }
    }

    #[test]
    fn test_open_endpoints_use_mirrored_phantoms() {
        let points = vec![DVec2::new(0.0, 0.0), DVec2::new(30.0, 0.0)];
        let cps = auto_handles(&points, false, 1.0);
        // Phantom (−30, 0) → Tangente (30 − (−30))/2 = 30, Handle = 10
        assert_eq!(cps[0].handle_out, Some(DVec2::new(10.0, 0.0)));
        assert_eq!(cps[1].handle_in, Some(DVec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_single_point_gets_no_handles() {
        let cps = auto_handles(&[DVec2::new(1.0, 2.0)], true, 1.0);
        assert_eq!(cps, vec![ControlPoint::new(DVec2::new(1.0, 2.0))]);
    }
}
