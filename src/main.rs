//! Bézier Track Engine (CLI).
//!
//! Liest eine Strecken-Eingabe als JSON, baut die Strecke und schreibt das
//! Ergebnis (Strecke plus Validierung) als JSON.

use anyhow::Context;
use bezier_track_engine::json::{read_track_input, write_track_build, write_track_build_file};
use bezier_track_engine::{build_track, EngineOptions};
use clap::Parser;
use std::path::PathBuf;

/// Kommandozeilen-Argumente.
#[derive(Debug, Parser)]
#[command(name = "track-engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Baut eine Rennstrecke aus Bézier-Kontrollpunkten")]
struct CliArgs {
    /// Strecken-Eingabe als JSON
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Options-Datei (TOML); ohne Angabe wird `track_engine.toml` neben der Binary gesucht
    #[arg(short = 'c', long = "options", value_name = "TOML")]
    options: Option<PathBuf>,

    /// Ergebnis in diese Datei schreiben statt auf stdout
    #[arg(short = 'o', long = "out", value_name = "JSON")]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();

    log::info!("Track Engine v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen: explizite Datei muss lesbar sein, sonst TOML neben der Binary
    let options = match &args.options {
        Some(path) => EngineOptions::try_load_from_file(path)?,
        None => EngineOptions::load_from_file(&EngineOptions::config_path()),
    };

    let input = read_track_input(&args.input)?;
    let build = build_track(&input, &options)
        .with_context(|| format!("Strecke aus {} nicht baubar", args.input.display()))?;

    for message in &build.validation_errors {
        log::warn!("Validierung: {}", message);
    }

    match &args.out {
        Some(path) => write_track_build_file(&build, path)?,
        None => println!("{}", write_track_build(&build)?),
    }
    Ok(())
}
