//! # Readout Module
//!
//! The presentation contract between the classifier and whatever renders
//! it. A front end owns its own display state; it only needs a [`Readout`]
//! built from each [`PitchReading`].
//!
//! - Clear → green, somewhat clear → yellow, unclear → red
//! - No signal → dashes and no colour

use serde::Serialize;

use crate::classifier::PitchReading;

/// Placeholder shown for saptak and swar when nothing is detected.
pub const EMPTY_FIELD: &str = "-";

/// Frequency text shown when nothing is detected.
pub const NO_SOUND: &str = "No sound detected";

/// Colour used to render the swar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Yellow,
    Red,
}

impl DisplayColor {
    pub const fn name(self) -> &'static str {
        match self {
            DisplayColor::Green => "green",
            DisplayColor::Yellow => "yellow",
            DisplayColor::Red => "red",
        }
    }
}

/// The rendered fields for one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub frequency: String,
    pub saptak: String,
    pub swar: String,
    /// `None` for the empty state.
    pub color: Option<DisplayColor>,
    /// Signed cents deviation, absent for the empty state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cents: Option<f64>,
}

impl Readout {
    pub fn from_reading(reading: &PitchReading) -> Self {
        match reading {
            PitchReading::Detected(c) => Self {
                frequency: format!("{:.2} Hz", c.frequency),
                saptak: c.saptak_label().into_owned(),
                swar: c.swar_name().to_string(),
                color: Some(c.clarity.display_color()),
                cents: Some(c.cents),
            },
            PitchReading::NoSignal => Self::empty(),
        }
    }

    /// The dashed state shown when no sound is detected.
    pub fn empty() -> Self {
        Self {
            frequency: NO_SOUND.to_string(),
            saptak: EMPTY_FIELD.to_string(),
            swar: EMPTY_FIELD.to_string(),
            color: None,
            cents: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

impl From<&PitchReading> for Readout {
    fn from(reading: &PitchReading) -> Self {
        Self::from_reading(reading)
    }
}
