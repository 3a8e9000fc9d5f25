//! Kubische Bézier-Primitive (Position, Ableitungen, Krümmung).
//!
//! Ohne Clamping und ohne Allokation, damit sie in engen Abtastschleifen
//! benutzt werden können. Aufrufer begrenzen `t` selbst auf [0, 1].

use super::DEGENERATE_EPSILON;
use glam::DVec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·CP1 + 3(1-t)t²·CP2 + t³·P1
pub fn cubic_bezier(p0: DVec2, cp1: DVec2, cp2: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * cp1 + 3.0 * inv * t2 * cp2 + t2 * t * p1
}

/// B'(t) = 3(1-t)²·(CP1-P0) + 6(1-t)t·(CP2-CP1) + 3t²·(P1-CP2)
pub fn cubic_bezier_tangent(p0: DVec2, cp1: DVec2, cp2: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (cp1 - p0) + 6.0 * inv * t * (cp2 - cp1) + 3.0 * t * t * (p1 - cp2)
}

/// B''(t) = 6(1-t)·(CP2 - 2·CP1 + P0) + 6t·(P1 - 2·CP2 + CP1)
pub fn cubic_bezier_second_derivative(
    p0: DVec2,
    cp1: DVec2,
    cp2: DVec2,
    p1: DVec2,
    t: f64,
) -> DVec2 {
    6.0 * (1.0 - t) * (cp2 - 2.0 * cp1 + p0) + 6.0 * t * (p1 - 2.0 * cp2 + cp1)
}

/// κ(t) = (B' × B'') / |B'|³ mit Vorzeichen (positiv = Linkskurve).
///
/// Gibt 0 zurück wenn die Tangente verschwindet (Spitze, Null-Handles).
pub fn signed_curvature(p0: DVec2, cp1: DVec2, cp2: DVec2, p1: DVec2, t: f64) -> f64 {
    let d1 = cubic_bezier_tangent(p0, cp1, cp2, p1, t);
    let speed = d1.length();
    if speed < DEGENERATE_EPSILON {
        return 0.0;
    }
    let d2 = cubic_bezier_second_derivative(p0, cp1, cp2, p1, t);
    d1.perp_dot(d2) / (speed * speed * speed)
}

/// |κ(t)|, 0 bei verschwindender Tangente.
pub fn curvature(p0: DVec2, cp1: DVec2, cp2: DVec2, p1: DVec2, t: f64) -> f64 {
    signed_curvature(p0, cp1, cp2, p1, t).abs()
}
