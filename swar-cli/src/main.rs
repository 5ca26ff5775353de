//! # Swar - Hindustani Note Detector
//!
//! Terminal front end for the swar classifier. Frequencies come from an
//! external pitch detector, either as arguments or one per line on stdin,
//! and each one is shown as its frequency, saptak and swar, with the swar
//! coloured by clarity.
//!
//! ## Architecture
//! - **Reader Thread**: parses stdin lines into samples
//! - **Main Thread**: classifies each sample and prints the readout
//! - **Communication**: a bounded crossbeam channel between the two

mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use swar_core::{PitchClassifier, Readout, ScaleKey, SessionConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use render::RenderOptions;

/// Classify detected pitches into swar and saptak
#[derive(Parser, Debug)]
#[command(name = "swar", version)]
#[command(about = "Classify detected pitches into Hindustani swar, saptak and clarity")]
struct Args {
    /// Scale key chosen as Sa (C, C#, D, ... B)
    #[arg(short, long, value_name = "KEY")]
    scale: Option<ScaleKey>,

    /// Load session settings from a JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the effective session settings to a JSON file
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Print one JSON readout per sample
    #[arg(long)]
    json: bool,

    /// Show the signed cents deviation
    #[arg(long)]
    cents: bool,

    /// Frequencies in Hz; read from stdin when omitted
    #[arg(value_name = "HZ", allow_negative_numbers = true)]
    frequencies: Vec<f64>,
}

/// Builds the session from the config file, then applies flag overrides.
fn resolve_session(args: &Args) -> Result<SessionConfig> {
    let mut session = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(scale) = args.scale {
        session.scale = scale;
    }
    session.json |= args.json;
    session.show_cents |= args.cents;
    Ok(session)
}

fn emit(out: &mut impl Write, classifier: &PitchClassifier, frequency: f64, options: RenderOptions) -> Result<()> {
    let reading = classifier.classify(frequency);
    let readout = Readout::from_reading(&reading);
    writeln!(out, "{}", render::render(&readout, options)?)?;
    if !options.json {
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let session = resolve_session(&args)?;

    if let Some(path) = &args.save_config {
        session
            .save(path)
            .with_context(|| format!("Failed to save session config {}", path.display()))?;
        info!("[MAIN] Saved session config to {}", path.display());
    }

    let classifier = session.classifier();
    let options = RenderOptions {
        show_cents: session.show_cents,
        json: session.json,
    };
    info!("[MAIN] Sa = {} (note {})", session.scale, classifier.tonic());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.frequencies.is_empty() {
        for &frequency in &args.frequencies {
            emit(&mut out, &classifier, frequency, options)?;
        }
        return Ok(());
    }

    debug!("[MAIN] Reading samples from stdin");
    let (samples, reader) = input::spawn_reader(io::BufReader::new(io::stdin()));
    for frequency in samples.iter() {
        emit(&mut out, &classifier, frequency, options)?;
        out.flush()?;
    }
    if reader.join().is_err() {
        anyhow::bail!("Input reader thread panicked");
    }
    debug!("[MAIN] Input finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("swar").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn parses_scale_and_frequencies() {
        let parsed = args(&["--scale", "A", "880", "20", "-5"]);
        assert_eq!(parsed.scale, Some(ScaleKey::A));
        assert_eq!(parsed.frequencies, vec![880.0, 20.0, -5.0]);
    }

    #[test]
    fn rejects_unknown_scale() {
        assert!(Args::try_parse_from(["swar", "--scale", "H"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{ "scale": "D", "show_cents": true }"#).unwrap();

        let config = path.to_str().unwrap();
        let session = resolve_session(&args(&["--config", config])).unwrap();
        assert_eq!(session.scale, ScaleKey::D);
        assert!(session.show_cents);
        assert!(!session.json);

        let session = resolve_session(&args(&["--config", config, "--scale", "Bb", "--json"])).unwrap();
        assert_eq!(session.scale, ScaleKey::ASharp);
        assert!(session.json);
    }

    #[test]
    fn missing_config_is_an_error() {
        let parsed = args(&["--config", "/nonexistent/swar-session.json"]);
        assert!(resolve_session(&parsed).is_err());
    }

    #[test]
    fn emits_one_json_line_per_sample() {
        let classifier = PitchClassifier::new(ScaleKey::C);
        let options = RenderOptions { show_cents: false, json: true };
        let mut out = Vec::new();
        emit(&mut out, &classifier, 261.63, options).unwrap();
        emit(&mut out, &classifier, 10.0, options).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"Madhya\""));
        assert!(lines[1].contains("No sound detected"));
    }
}
