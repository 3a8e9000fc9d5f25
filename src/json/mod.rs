//! JSON Import/Export für Strecken-Eingaben und fertige Strecken.
//!
//! Feldnamen sind camelCase, Punkte werden als `[x, y]` geschrieben.

pub mod parser;
pub mod writer;

pub use parser::{parse_track_input, parse_track_record, read_track_input, read_track_record};
pub use writer::{
    write_track_build, write_track_build_file, write_track_record, write_track_record_file,
};
