//! Zentrale Konfiguration der Track-Engine.
//!
//! `EngineOptions` enthält alle einstellbaren Werte der Pipeline.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::chain::ContinuityOptions;
use crate::core::RaceDirection;
use crate::corners::{
    CornerHeuristicConfig, DEFAULT_CURVATURE_THRESHOLD, DEFAULT_MIN_CORNER_SPACING,
};
use crate::geometry::DEFAULT_ARC_LENGTH_SAMPLES;
use crate::validate::ValidationOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Kette ───────────────────────────────────────────────────────────

/// Standard-Spannung der automatisch erzeugten Handles (1.0 = Catmull-Rom).
pub const DEFAULT_HANDLE_TENSION: f64 = 1.0;

// ── Strecke ─────────────────────────────────────────────────────────

/// Standard-Rundenanzahl, wenn die Eingabe keine angibt.
pub const DEFAULT_LAP_COUNT: u32 = 3;

/// Dateiname der Options-Datei neben der Binary.
const OPTIONS_FILE_NAME: &str = "track_engine.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle einstellbaren Optionen der Track-Engine.
/// Wird als `track_engine.toml` neben der Binary gesucht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    // ── Kette ───────────────────────────────────────────────────
    /// Handles per Catmull-Rom erzeugen, wenn kein Punkt eigene Handles hat
    pub auto_handles: bool,
    /// Spannung der erzeugten Handles
    pub handle_tension: f64,
    /// Fugen vor der Diskretisierung per `continuity` angleichen
    pub smooth_joints: bool,

    // ── Bogenlänge ──────────────────────────────────────────────
    /// Abtast-Intervalle pro Segment
    pub arc_length_samples: usize,

    // ── Kurven ──────────────────────────────────────────────────
    /// Kurven nur oberhalb dieser Krümmung vorschlagen
    pub corner_curvature_threshold: f64,
    /// Mindestabstand zweier Kurven in Space-Indizes (zirkulär)
    pub min_corner_spacing: usize,

    // ── Strecke ─────────────────────────────────────────────────
    /// Rundenanzahl, wenn die Eingabe keine angibt
    pub default_lap_count: u32,
    /// Fahrtrichtung, wenn die Eingabe keine angibt
    pub race_direction: RaceDirection,

    // ── Unter-Tabellen ──────────────────────────────────────────
    /// Einstellungen der C1/C2-Angleichung
    pub continuity: ContinuityOptions,
    /// Koeffizienten der Kurven-Heuristik
    pub corner_heuristics: CornerHeuristicConfig,
    /// Einstellungen des Validators
    pub validation: ValidationOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            auto_handles: true,
            handle_tension: DEFAULT_HANDLE_TENSION,
            smooth_joints: false,
            arc_length_samples: DEFAULT_ARC_LENGTH_SAMPLES,
            corner_curvature_threshold: DEFAULT_CURVATURE_THRESHOLD,
            min_corner_spacing: DEFAULT_MIN_CORNER_SPACING,
            default_lap_count: DEFAULT_LAP_COUNT,
            race_direction: RaceDirection::default(),
            continuity: ContinuityOptions::default(),
            corner_heuristics: CornerHeuristicConfig::default(),
            validation: ValidationOptions::default(),
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match Self::try_load_from_file(path) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen nicht lesbar, verwende Standardwerte: {:#}", e);
                Self::default()
            }
        }
    }

    /// Lädt Optionen aus einer TOML-Datei und meldet jeden Fehler.
    pub fn try_load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Options-Datei nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Options-Datei fehlerhaft: {}", path.display()))
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Options-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad zur Options-Datei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("track-engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Bogenlängen-Abtastung, mindestens ein Intervall.
    pub fn effective_arc_length_samples(&self) -> usize {
        self.arc_length_samples.max(1)
    }
}
