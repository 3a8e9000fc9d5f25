//! Vom Nutzer bearbeiteter Kontrollpunkt einer Strecke.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt in der Streckenebene.
pub type Point = DVec2;

/// Kontrollpunkt mit optionalen Handles (absolute Koordinaten, keine Deltas).
///
/// Die Handles gehören exklusiv diesem Punkt. Ein Segment liest sie nur,
/// um daraus cp1/cp2 zu bilden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPoint {
    /// Position auf der Mittellinie
    pub position: Point,
    /// Eingehendes Handle (wird cp2 des vorherigen Segments)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Point>,
    /// Ausgehendes Handle (wird cp1 des folgenden Segments)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Point>,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt ohne Handles (lokal lineares Stück).
    pub fn new(position: Point) -> Self {
        Self {
            position,
            handle_in: None,
            handle_out: None,
        }
    }

    /// Erstellt einen Kontrollpunkt mit beiden Handles.
    pub fn with_handles(position: Point, handle_in: Point, handle_out: Point) -> Self {
        Self {
            position,
            handle_in: Some(handle_in),
            handle_out: Some(handle_out),
        }
    }

    /// Eingehendes Handle, bei Fehlen der Punkt selbst (Null-Handle).
    pub fn effective_handle_in(&self) -> Point {
        self.handle_in.unwrap_or(self.position)
    }

    /// Ausgehendes Handle, bei Fehlen der Punkt selbst (Null-Handle).
    pub fn effective_handle_out(&self) -> Point {
        self.handle_out.unwrap_or(self.position)
    }

    /// true wenn Position und vorhandene Handles endliche Koordinaten haben.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.handle_in.is_none_or(|h| h.is_finite())
            && self.handle_out.is_none_or(|h| h.is_finite())
    }
}

impl From<Point> for ControlPoint {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}
