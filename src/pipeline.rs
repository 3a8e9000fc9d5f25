//! Pipeline: Eingabe prüfen, Kette bauen, diskretisieren, Kurven vorschlagen, validieren.
//!
//! Die Stufen laufen strikt nacheinander, jede auf der vollständigen Ausgabe
//! der vorherigen. Fehlerhafte Eingaben brechen vor jeder Geometrie mit
//! `Err` ab. Strukturprobleme des Ergebnisses landen dagegen als Daten in
//! `TrackBuild::validation_errors`.

use crate::chain::{
    auto_handles, enforce_continuity, points_to_chain, ContinuityOptions, MIN_CHAIN_POINTS,
};
use crate::core::{
    Chain, Continuity, ControlPoint, DiscretizationParams, RaceDirection, TrackMetadata,
    TrackRecord,
};
use crate::corners::auto_suggest_corners;
use crate::discretize::{discretize, DEFAULT_SPOTS_PER_SPACE};
use crate::shared::EngineOptions;
use crate::validate::validate;
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Mindestanzahl Kontrollpunkte einer Eingabe.
pub const MIN_INPUT_POINTS: usize = 2;
/// Mindestanzahl Spaces pro Runde.
pub const MIN_SPACES_PER_LAP: usize = 3;
/// Mindestanzahl Spots pro Space.
pub const MIN_SPOTS_PER_SPACE: usize = 3;

/// Diskretisierungs-Parameter einer Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackParams {
    /// Anzahl Spaces pro Runde (≥ 3)
    pub target_spaces_per_lap: usize,
    /// Fahrbahnbreite (> 0)
    pub track_width: f64,
    /// Spots pro Space (≥ 3)
    #[serde(default = "default_spots_per_space")]
    pub spots_per_space: usize,
}

fn default_spots_per_space() -> usize {
    DEFAULT_SPOTS_PER_SPACE
}

/// Eingabe-Datensatz einer Strecke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInput {
    /// Kontrollpunkte der Mittellinie
    pub control_points: Vec<ControlPoint>,
    /// true = geschlossene Schleife
    #[serde(default = "default_closed")]
    pub closed: bool,
    /// Diskretisierungs-Parameter
    pub params: TrackParams,
    /// Anzeigename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rundenanzahl; sonst aus den Optionen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lap_count: Option<u32>,
    /// Fahrtrichtung; sonst aus den Optionen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_direction: Option<RaceDirection>,
}

fn default_closed() -> bool {
    true
}

impl TrackInput {
    /// Geschlossene Strecke aus Kontrollpunkten.
    pub fn new(control_points: Vec<ControlPoint>, params: TrackParams) -> Self {
        Self {
            control_points,
            closed: true,
            params,
            name: None,
            lap_count: None,
            race_direction: None,
        }
    }
}

/// Ergebnis eines Pipeline-Durchlaufs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackBuild {
    /// Fertige Strecke
    pub record: TrackRecord,
    /// Meldungen des Validators (leer = gültig)
    pub validation_errors: Vec<String>,
    /// true wenn `validation_errors` leer ist
    pub is_valid: bool,
}

impl TrackBuild {
    /// Validiert eine (z.B. importierte) Strecke und verpackt das Ergebnis.
    pub fn from_record(record: TrackRecord, options: &EngineOptions) -> Self {
        let validation_errors: Vec<String> = validate(&record, &options.validation)
            .iter()
            .map(ToString::to_string)
            .collect();
        Self {
            is_valid: validation_errors.is_empty(),
            record,
            validation_errors,
        }
    }
}

/// Prüft die Eingabe, ohne Geometrie zu berechnen.
pub fn check_input(input: &TrackInput) -> anyhow::Result<()> {
    let points = &input.control_points;
    if points.len() < MIN_INPUT_POINTS {
        bail!(
            "Strecke braucht mindestens {} Kontrollpunkte, erhalten: {}",
            MIN_INPUT_POINTS,
            points.len()
        );
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        bail!("Kontrollpunkt {} hat ungültige Koordinaten", index);
    }

    let params = &input.params;
    if !params.track_width.is_finite() || params.track_width <= 0.0 {
        bail!(
            "Fahrbahnbreite muss endlich und > 0 sein, erhalten: {}",
            params.track_width
        );
    }
    if params.target_spaces_per_lap < MIN_SPACES_PER_LAP {
        bail!(
            "Mindestens {} Spaces pro Runde nötig, erhalten: {}",
            MIN_SPACES_PER_LAP,
            params.target_spaces_per_lap
        );
    }
    if params.spots_per_space < MIN_SPOTS_PER_SPACE {
        bail!(
            "Mindestens {} Spots pro Space nötig, erhalten: {}",
            MIN_SPOTS_PER_SPACE,
            params.spots_per_space
        );
    }
    if params.spots_per_space % 2 == 0 {
        log::warn!(
            "Gerade Spot-Anzahl ({}): Ideallinie liegt nicht exakt mittig",
            params.spots_per_space
        );
    }
    Ok(())
}

/// Baut die Mittellinien-Kette aus der Eingabe.
///
/// Haben alle Punkte keine Handles, werden sie (falls aktiviert) per
/// Catmull-Rom erzeugt. Der Stetigkeitsgrad jeder Fuge wird gemessen und
/// gestempelt; angeglichen wird nur mit `smooth_joints`.
pub fn build_chain(input: &TrackInput, options: &EngineOptions) -> Chain {
    let bare = input
        .control_points
        .iter()
        .all(|p| p.handle_in.is_none() && p.handle_out.is_none());

    let enough_points = input.control_points.len() >= MIN_CHAIN_POINTS;
    let chain = if options.auto_handles && bare && enough_points {
        let positions: Vec<_> = input.control_points.iter().map(|p| p.position).collect();
        log::debug!("Erzeuge Handles für {} Punkte", positions.len());
        let points = auto_handles(&positions, input.closed, options.handle_tension);
        points_to_chain(&points, input.closed, Continuity::C0)
    } else {
        points_to_chain(&input.control_points, input.closed, Continuity::C0)
    };

    let continuity = if options.smooth_joints {
        options.continuity
    } else {
        ContinuityOptions {
            enforce_c1: false,
            enforce_c2: false,
            ..options.continuity
        }
    };
    enforce_continuity(&chain, &continuity)
}

/// Kompletter Durchlauf: Eingabe → fertige, validierte Strecke.
pub fn build_track(input: &TrackInput, options: &EngineOptions) -> anyhow::Result<TrackBuild> {
    check_input(input)?;

    let chain = build_chain(input, options);
    let samples = options.effective_arc_length_samples();
    let params = input.params;

    let spaces = discretize(
        &chain,
        params.target_spaces_per_lap,
        params.track_width,
        params.spots_per_space,
        samples,
    );
    let corners = auto_suggest_corners(
        &spaces,
        options.corner_curvature_threshold,
        options.min_corner_spacing,
        &options.corner_heuristics,
    );

    let record = TrackRecord {
        chain,
        spaces,
        corners,
        metadata: TrackMetadata {
            name: input.name.clone(),
            lap_count: input.lap_count.unwrap_or(options.default_lap_count),
            start_finish_index: 0,
            race_direction: input.race_direction.unwrap_or(options.race_direction),
            discretization: DiscretizationParams {
                target_spaces_per_lap: params.target_spaces_per_lap,
                track_width: params.track_width,
                spots_per_space: params.spots_per_space,
                arc_length_samples: samples,
            },
        },
    };

    let build = TrackBuild::from_record(record, options);
    log::info!(
        "Strecke gebaut: {} Segmente, {} Spaces, {} Kurven, gültig: {}",
        build.record.chain.len(),
        build.record.space_count(),
        build.record.corner_count(),
        build.is_valid
    );
    for message in &build.validation_errors {
        log::debug!("Validierung: {}", message);
    }
    Ok(build)
}
