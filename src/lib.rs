//! Bézier Track Engine Library.
//! Geometrie, Diskretisierung, Kurven-Analyse und Validierung von Brettspiel-Rennstrecken.

pub mod chain;
pub mod core;
pub mod corners;
pub mod discretize;
pub mod geometry;
pub mod json;
pub mod pipeline;
pub mod shared;
pub mod validate;

pub use chain::{
    analyze_quality, auto_handles, chain_to_points, enforce_continuity, points_to_chain,
    ChainQuality, ContinuityOptions,
};
pub use core::{
    Chain, Continuity, ControlPoint, Corner, CornerType, InnerSide, Point, RaceDirection,
    Segment, Space, Spot, SpotType, TrackMetadata, TrackRecord,
};
pub use corners::{assign_inner_sides, auto_suggest_corners, insert_corner, CornerHeuristicConfig};
pub use discretize::discretize;
pub use geometry::{chain_length, find_t_for_distance, segment_length, ArcLengthTable, ArcPosition};
pub use json::{parse_track_input, parse_track_record, write_track_record};
pub use pipeline::{build_track, TrackBuild, TrackInput, TrackParams};
pub use shared::EngineOptions;
pub use validate::{validate, SelfIntersectionMode, ValidationError, ValidationOptions};
