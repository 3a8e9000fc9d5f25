//! Umwandlung zwischen flacher Kontrollpunktliste und Segmentkette.

use crate::core::{Chain, Continuity, ControlPoint, Point, Segment};

/// Mindestanzahl Kontrollpunkte für eine Kette mit Geometrie.
///
/// Zwei Punkte ergeben keine sinnvolle Strecke (geschlossen liefen beide
/// Segmente übereinander), daher gilt alles darunter als degeneriert.
pub const MIN_CHAIN_POINTS: usize = 3;

/// Handles kürzer als dieser Abstand gelten als nicht gesetzt.
const HANDLE_EPSILON: f64 = 1e-9;

/// Baut aus der Punktliste N (geschlossen) bzw. N-1 (offen) Segmente.
///
/// cp1 ist das ausgehende Handle des Startpunkts, cp2 das eingehende Handle
/// des Endpunkts; fehlende Handles fallen auf den Punkt selbst zurück.
/// `continuity` wird nur als Metadatum gestempelt.
pub fn points_to_chain(points: &[ControlPoint], closed: bool, continuity: Continuity) -> Chain {
    if points.len() < MIN_CHAIN_POINTS {
        log::debug!(
            "Kette degeneriert: {} Punkte (min. {})",
            points.len(),
            MIN_CHAIN_POINTS
        );
        return Chain::empty(closed);
    }

    let n = points.len();
    let segment_count = if closed { n } else { n - 1 };
    let segments = (0..segment_count)
        .map(|i| {
            let a = &points[i];
            let b = &points[(i + 1) % n];
            let mut segment = Segment::new(
                i as u64,
                a.position,
                a.effective_handle_out(),
                b.effective_handle_in(),
                b.position,
            );
            segment.continuity = continuity;
            segment
        })
        .collect();

    Chain::new(segments, closed)
}

/// Umkehrung von [`points_to_chain`].
///
/// Null-Handles kommen als `None` zurück. Bei offenen Ketten sind das
/// eingehende Handle des ersten und das ausgehende des letzten Punkts nicht
/// Teil der Geometrie und bleiben `None`.
pub fn chain_to_points(chain: &Chain) -> Vec<ControlPoint> {
    let n = chain.segments.len();
    if n == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(if chain.closed { n } else { n + 1 });
    for (i, segment) in chain.segments.iter().enumerate() {
        let handle_in = if chain.closed {
            Some(chain.segments[(i + n - 1) % n].cp2)
        } else if i > 0 {
            Some(chain.segments[i - 1].cp2)
        } else {
            None
        };
        points.push(ControlPoint {
            position: segment.start,
            handle_in: handle_in.and_then(|h| non_zero_handle(h, segment.start)),
            handle_out: non_zero_handle(segment.cp1, segment.start),
        });
    }

    if !chain.closed {
        let last = &chain.segments[n - 1];
        points.push(ControlPoint {
            position: last.end,
            handle_in: non_zero_handle(last.cp2, last.end),
            handle_out: None,
        });
    }

    points
}

fn non_zero_handle(handle: Point, anchor: Point) -> Option<Point> {
    (handle.distance(anchor) > HANDLE_EPSILON).then_some(handle)
}
