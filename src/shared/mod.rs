//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Engine-Optionen, die Pipeline, Binary und Tests gemeinsam nutzen.

pub mod options;

pub use options::EngineOptions;
pub use options::{DEFAULT_HANDLE_TENSION, DEFAULT_LAP_COUNT};
