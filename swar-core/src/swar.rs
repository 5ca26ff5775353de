//! # Swar Module
//!
//! The data model of a classification: the seven shuddha swars of Bilawal
//! thaat, the saptak (octave register) and the clarity verdict.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::display::DisplayColor;

/// A scale degree of Bilawal thaat. No komal or tivra variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swar {
    Sa,
    Re,
    Ga,
    Ma,
    Pa,
    Dha,
    Ni,
}

impl Swar {
    /// All swars in ascending order of semitone offset.
    pub const ALL: [Swar; 7] = [
        Swar::Sa,
        Swar::Re,
        Swar::Ga,
        Swar::Ma,
        Swar::Pa,
        Swar::Dha,
        Swar::Ni,
    ];

    /// Semitones above Sa within one octave.
    pub const fn semitone_offset(self) -> i32 {
        match self {
            Swar::Sa => 0,
            Swar::Re => 2,
            Swar::Ga => 4,
            Swar::Ma => 5,
            Swar::Pa => 7,
            Swar::Dha => 9,
            Swar::Ni => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Swar::Sa => "Sa",
            Swar::Re => "Re",
            Swar::Ga => "Ga",
            Swar::Ma => "Ma",
            Swar::Pa => "Pa",
            Swar::Dha => "Dha",
            Swar::Ni => "Ni",
        }
    }
}

impl fmt::Display for Swar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Octave register relative to the tonic octave.
///
/// Any integer is a valid saptak; only -1, 0 and 1 have traditional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Saptak(pub i32);

impl Saptak {
    pub const MANDRA: Saptak = Saptak(-1);
    pub const MADHYA: Saptak = Saptak(0);
    pub const TAAR: Saptak = Saptak(1);

    pub const fn index(self) -> i32 {
        self.0
    }

    /// "Mandra", "Madhya" or "Taar", otherwise "Saptak {k}".
    pub fn label(self) -> Cow<'static, str> {
        match self.0 {
            -1 => Cow::Borrowed("Mandra"),
            0 => Cow::Borrowed("Madhya"),
            1 => Cow::Borrowed("Taar"),
            k => Cow::Owned(format!("Saptak {}", k)),
        }
    }
}

impl fmt::Display for Saptak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Upper bound (exclusive) in cents for a [`Clarity::Clear`] verdict.
pub const CLEAR_CENTS: f64 = 10.0;

/// Upper bound (exclusive) in cents for a [`Clarity::SomewhatClear`] verdict.
pub const SOMEWHAT_CLEAR_CENTS: f64 = 20.0;

/// Tuning accuracy of a detected pitch against its nearest swar.
///
/// Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Clarity {
    Clear,
    SomewhatClear,
    Unclear,
}

impl Clarity {
    /// Classifies an absolute deviation in cents.
    pub fn from_cents(abs_cents: f64) -> Self {
        if abs_cents < CLEAR_CENTS {
            Clarity::Clear
        } else if abs_cents < SOMEWHAT_CLEAR_CENTS {
            Clarity::SomewhatClear
        } else {
            Clarity::Unclear
        }
    }

    /// Colour a presentation layer must use for this verdict.
    pub const fn display_color(self) -> DisplayColor {
        match self {
            Clarity::Clear => DisplayColor::Green,
            Clarity::SomewhatClear => DisplayColor::Yellow,
            Clarity::Unclear => DisplayColor::Red,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Clarity::Clear => "Clear",
            Clarity::SomewhatClear => "Somewhat clear",
            Clarity::Unclear => "Unclear",
        }
    }
}

impl fmt::Display for Clarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_ascending_within_an_octave() {
        let offsets: Vec<i32> = Swar::ALL.iter().map(|s| s.semitone_offset()).collect();
        assert_eq!(offsets, vec![0, 2, 4, 5, 7, 9, 11]);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(offsets.iter().all(|&o| (0..12).contains(&o)));
    }

    #[test]
    fn saptak_labels() {
        assert_eq!(Saptak(-1).label(), "Mandra");
        assert_eq!(Saptak(0).label(), "Madhya");
        assert_eq!(Saptak(1).label(), "Taar");
        assert_eq!(Saptak(2).label(), "Saptak 2");
        assert_eq!(Saptak(-4).to_string(), "Saptak -4");
        assert_eq!(Saptak(i32::MIN).label(), format!("Saptak {}", i32::MIN));
    }

    #[test]
    fn clarity_thresholds_are_exclusive() {
        assert_eq!(Clarity::from_cents(0.0), Clarity::Clear);
        assert_eq!(Clarity::from_cents(9.999), Clarity::Clear);
        assert_eq!(Clarity::from_cents(10.0), Clarity::SomewhatClear);
        assert_eq!(Clarity::from_cents(19.999), Clarity::SomewhatClear);
        assert_eq!(Clarity::from_cents(20.0), Clarity::Unclear);
        assert_eq!(Clarity::from_cents(600.0), Clarity::Unclear);
    }

    #[test]
    fn clarity_colours() {
        assert_eq!(Clarity::Clear.display_color(), DisplayColor::Green);
        assert_eq!(Clarity::SomewhatClear.display_color(), DisplayColor::Yellow);
        assert_eq!(Clarity::Unclear.display_color(), DisplayColor::Red);
    }
}
