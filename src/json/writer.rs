//! Writer für Strecken-JSON.

use crate::core::TrackRecord;
use crate::pipeline::TrackBuild;
use anyhow::{Context, Result};
use std::path::Path;

/// Schreibt eine Strecke als formatiertes JSON.
pub fn write_track_record(record: &TrackRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Strecke nicht serialisierbar")
}

/// Schreibt ein Pipeline-Ergebnis (Strecke plus Validierung) als formatiertes JSON.
pub fn write_track_build(build: &TrackBuild) -> Result<String> {
    serde_json::to_string_pretty(build).context("Ergebnis nicht serialisierbar")
}

/// Schreibt eine Strecke in eine Datei.
pub fn write_track_record_file(record: &TrackRecord, path: &Path) -> Result<()> {
    let content = write_track_record(record)?;
    std::fs::write(path, content)
        .with_context(|| format!("Strecke nicht schreibbar: {}", path.display()))?;
    log::info!("Strecke gespeichert nach: {}", path.display());
    Ok(())
}

/// Schreibt ein Pipeline-Ergebnis in eine Datei.
pub fn write_track_build_file(build: &TrackBuild, path: &Path) -> Result<()> {
    let content = write_track_build(build)?;
    std::fs::write(path, content)
        .with_context(|| format!("Ergebnis nicht schreibbar: {}", path.display()))?;
    log::info!("Ergebnis gespeichert nach: {}", path.display());
    Ok(())
}
