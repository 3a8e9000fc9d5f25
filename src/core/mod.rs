//! Core-Domänentypen: Kontrollpunkte, Bézier-Kette, Spaces, Spots, Kurven, TrackRecord.

pub mod chain;
pub mod control_point;
pub mod corner;
pub mod space;
/// Aggregat aus Kette, Spaces, Kurven und Strecken-Metadaten.
///
/// Einheit, auf der der Validator arbeitet und die persistiert wird.
pub mod track_record;

pub use chain::{Chain, Continuity, Segment};
pub use control_point::{ControlPoint, Point};
pub use corner::{Corner, CornerType, InnerSide};
pub use space::{Space, SpaceMetadata, Spot, SpotType};
pub use track_record::{DiscretizationParams, RaceDirection, TrackMetadata, TrackRecord};
