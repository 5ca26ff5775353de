//! # Terminal Readout
//!
//! Renders one [`Readout`] per sample, either as coloured text lines or as a
//! JSON object per line.

use colored::{ColoredString, Colorize};
use swar_core::{DisplayColor, Readout};

/// How readouts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_cents: bool,
    pub json: bool,
}

fn paint(text: &str, color: Option<DisplayColor>) -> ColoredString {
    match color {
        Some(color) => text.color(color.name()),
        None => text.normal(),
    }
}

/// Formats a readout as the three display lines.
pub fn render_text(readout: &Readout, show_cents: bool) -> String {
    let mut swar = paint(&readout.swar, readout.color).bold().to_string();
    if show_cents {
        if let Some(cents) = readout.cents {
            swar.push_str(&format!(" ({:+.1} cents)", cents));
        }
    }

    format!(
        "Frequency: {}\nSaptak: {}\nSwar: {}",
        readout.frequency, readout.saptak, swar
    )
}

pub fn render(readout: &Readout, options: RenderOptions) -> anyhow::Result<String> {
    if options.json {
        let mut readout = readout.clone();
        if !options.show_cents {
            readout.cents = None;
        }
        Ok(serde_json::to_string(&readout)?)
    } else {
        Ok(render_text(readout, options.show_cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swar_core::{PitchReading, classify};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn text_readout_for_detection() {
        plain();
        let readout = Readout::from_reading(&classify(880.0, 69));
        assert_eq!(
            render_text(&readout, false),
            "Frequency: 880.00 Hz\nSaptak: Taar\nSwar: Sa"
        );
        let with_cents = render_text(&readout, true);
        assert!(with_cents.contains("Swar: Sa ("));
        assert!(with_cents.ends_with(".0 cents)"));
    }

    #[test]
    fn paints_by_colour_name() {
        assert_eq!(paint("Sa", Some(DisplayColor::Green)), "Sa".green());
        assert_eq!(paint("Re", Some(DisplayColor::Yellow)), "Re".yellow());
        assert_eq!(paint("Ga", Some(DisplayColor::Red)), "Ga".red());
        assert_eq!(paint("-", None), "-".normal());
    }

    #[test]
    fn text_readout_for_silence() {
        plain();
        let readout = Readout::from_reading(&PitchReading::NoSignal);
        assert_eq!(
            render_text(&readout, true),
            "Frequency: No sound detected\nSaptak: -\nSwar: -"
        );
    }

    #[test]
    fn json_readout_omits_cents_unless_asked() {
        let readout = Readout::from_reading(&classify(261.63, 60));
        let options = RenderOptions { show_cents: false, json: true };
        let line = render(&readout, options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["swar"], "Sa");
        assert_eq!(value["saptak"], "Madhya");
        assert_eq!(value["color"], "green");
        assert!(value.get("cents").is_none());

        let line = render(&readout, RenderOptions { show_cents: true, json: true }).unwrap();
        assert!(line.contains("\"cents\""));
    }

    #[test]
    fn json_readout_for_silence_has_null_colour() {
        let readout = Readout::from_reading(&PitchReading::NoSignal);
        let line = render(&readout, RenderOptions { show_cents: true, json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["color"].is_null());
        assert_eq!(value["swar"], "-");
    }
}
