//! Operationen auf der Bézier-Kette.
//!
//! Aufgeteilt in:
//! - `convert`      — Kontrollpunkte ↔ Segmente
//! - `auto_handles` — Catmull-Rom-Handles für Punkte ohne eigene Handles
//! - `continuity`   — C1/C2-Angleichung an den Fugen (reine Transformation)
//! - `quality`      — Diagnose: Länge, Krümmungsstatistik, Stetigkeitsgrad

pub mod auto_handles;
pub mod continuity;
pub mod convert;
pub mod quality;

pub use auto_handles::auto_handles;
pub use continuity::{continuity_level, enforce_continuity, measure_joint, ContinuityOptions};
pub use convert::{chain_to_points, points_to_chain, MIN_CHAIN_POINTS};
pub use quality::{analyze_quality, ChainQuality};
