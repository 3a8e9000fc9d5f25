//! Struktur-Prüfung fertiger Strecken.
//!
//! `validate` sammelt alle Verstöße, bricht nie beim ersten ab und arbeitet
//! auf jedem `TrackRecord`, auch auf importierten.

mod intersection;

pub use intersection::{find_self_intersections, SelfIntersectionMode};

use crate::core::TrackRecord;
use crate::corners::{MAX_SPEED_LIMIT, MIN_SPEED_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Mindestanzahl Segmente einer gültigen Strecke.
pub const MIN_TRACK_SEGMENTS: usize = 3;

/// Einstellungen des Validators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Verfahren der Selbstüberschneidungs-Prüfung
    pub self_intersection: SelfIntersectionMode,
    /// Toleranz für Berührungen (Welteinheiten)
    pub intersection_tolerance: f64,
    /// Polylinien-Punkte pro Segment im Modus `Polyline`
    pub polyline_samples: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            self_intersection: SelfIntersectionMode::default(),
            intersection_tolerance: 1e-6,
            polyline_samples: 16,
        }
    }
}

/// Ein einzelner Struktur-Verstoß.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Kette ist offen
    NotClosed,
    /// Zu wenige Segmente
    TooFewSegments { count: usize },
    /// Space ohne Spots
    SpaceWithoutSpots { space_index: usize },
    /// Space mit keiner oder mehreren Ideallinien
    RaceLineCount { space_index: usize, count: usize },
    /// Kurve verweist auf nicht existierenden Space
    CornerOutOfRange {
        corner_id: u64,
        space_index: usize,
        space_count: usize,
    },
    /// Tempolimit außerhalb von 1..=6
    SpeedLimitOutOfRange { corner_id: u64, speed_limit: u8 },
    /// Mehrere Kurven auf demselben Space
    DuplicateCorner { space_index: usize },
    /// Start/Ziel-Index außerhalb der Spaces
    StartFinishOutOfRange { index: usize, space_count: usize },
    /// Rundenanzahl 0
    InvalidLapCount,
    /// Zwei nicht benachbarte Segmente überschneiden sich
    SelfIntersection { first: usize, second: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotClosed => write!(f, "Track chain must form a closed loop"),
            Self::TooFewSegments { count } => write!(
                f,
                "Track needs at least {} segments, found {}",
                MIN_TRACK_SEGMENTS, count
            ),
            Self::SpaceWithoutSpots { space_index } => {
                write!(f, "Space {} has no spots", space_index)
            }
            Self::RaceLineCount { space_index, count } => write!(
                f,
                "Space {} must have exactly one race-line spot, found {}",
                space_index, count
            ),
            Self::CornerOutOfRange {
                corner_id,
                space_index,
                space_count,
            } => write!(
                f,
                "Corner {} references space {} but the track has {} spaces",
                corner_id, space_index, space_count
            ),
            Self::SpeedLimitOutOfRange {
                corner_id,
                speed_limit,
            } => write!(
                f,
                "Corner {} has speed limit {} outside {}..={}",
                corner_id, speed_limit, MIN_SPEED_LIMIT, MAX_SPEED_LIMIT
            ),
            Self::DuplicateCorner { space_index } => {
                write!(f, "More than one corner at space {}", space_index)
            }
            Self::StartFinishOutOfRange { index, space_count } => write!(
                f,
                "Start/finish index {} out of range for {} spaces",
                index, space_count
            ),
            Self::InvalidLapCount => write!(f, "Lap count must be at least 1"),
            Self::SelfIntersection { first, second } => write!(
                f,
                "Segments {} and {} intersect",
                first, second
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Prüft eine Strecke vollständig und liefert alle Verstöße.
///
/// Leeres Ergebnis = gültige Strecke.
pub fn validate(track: &TrackRecord, options: &ValidationOptions) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let chain = &track.chain;
    let space_count = track.spaces.len();

    if !chain.closed {
        errors.push(ValidationError::NotClosed);
    }
    if chain.len() < MIN_TRACK_SEGMENTS {
        errors.push(ValidationError::TooFewSegments { count: chain.len() });
    }

    for (space_index, space) in track.spaces.iter().enumerate() {
        if space.spots.is_empty() {
            errors.push(ValidationError::SpaceWithoutSpots { space_index });
        }
        let count = space.race_line_count();
        if count != 1 {
            errors.push(ValidationError::RaceLineCount { space_index, count });
        }
    }

    let mut occupied = HashSet::new();
    for corner in &track.corners {
        if corner.space_index >= space_count {
            errors.push(ValidationError::CornerOutOfRange {
                corner_id: corner.id,
                space_index: corner.space_index,
                space_count,
            });
        }
        if !(MIN_SPEED_LIMIT..=MAX_SPEED_LIMIT).contains(&corner.speed_limit) {
            errors.push(ValidationError::SpeedLimitOutOfRange {
                corner_id: corner.id,
                speed_limit: corner.speed_limit,
            });
        }
        if !occupied.insert(corner.space_index) {
            errors.push(ValidationError::DuplicateCorner {
                space_index: corner.space_index,
            });
        }
    }

    let start = track.metadata.start_finish_index;
    if start >= space_count {
        errors.push(ValidationError::StartFinishOutOfRange {
            index: start,
            space_count,
        });
    }
    if track.metadata.lap_count < 1 {
        errors.push(ValidationError::InvalidLapCount);
    }

    errors.extend(
        find_self_intersections(chain, options)
            .into_iter()
            .map(|(first, second)| ValidationError::SelfIntersection { first, second }),
    );

    if errors.is_empty() {
        log::debug!("Validierung ok ({} Spaces)", space_count);
    } else {
        log::debug!("Validierung: {} Verstöße", errors.len());
    }
    errors
}
