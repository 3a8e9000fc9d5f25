//! Reine Geometrie-Funktionen: Bézier-Primitive und Bogenlängen-Parametrisierung.
//!
//! Layer-neutral: wird von `chain`, `discretize`, `validate` und den
//! Core-Typen importiert, ohne selbst auf diese angewiesen zu sein.

pub mod arc_length;
pub mod bezier;

pub use arc_length::{
    chain_length, find_t_for_distance, segment_length, ArcLengthTable, ArcPosition,
};
pub use bezier::{
    cubic_bezier, cubic_bezier_second_derivative, cubic_bezier_tangent, curvature,
    signed_curvature,
};

/// Standard-Abtastdichte (Intervalle pro Segment) der Bogenlängen-Integration.
pub const DEFAULT_ARC_LENGTH_SAMPLES: usize = 100;

/// Unterhalb dieser Tangentenlänge gilt eine Ableitung als degeneriert.
pub const DEGENERATE_EPSILON: f64 = 1e-9;
