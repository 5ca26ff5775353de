//! # Scale Selection Module
//!
//! The 12-key chromatic selector used to choose Sa. Each key maps to a
//! fixed MIDI note number in the octave starting at middle C (C4 = 60).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SwarError;

/// A scale key, i.e. the pitch class chosen as Sa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleKey {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl ScaleKey {
    /// Keys in selector order, C through B.
    pub const ALL: [ScaleKey; 12] = [
        ScaleKey::C,
        ScaleKey::CSharp,
        ScaleKey::D,
        ScaleKey::DSharp,
        ScaleKey::E,
        ScaleKey::F,
        ScaleKey::FSharp,
        ScaleKey::G,
        ScaleKey::GSharp,
        ScaleKey::A,
        ScaleKey::ASharp,
        ScaleKey::B,
    ];

    /// MIDI note number of Sa for this key (60..=71).
    pub const fn note_number(self) -> i32 {
        60 + self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScaleKey::C => "C",
            ScaleKey::CSharp => "C#",
            ScaleKey::D => "D",
            ScaleKey::DSharp => "D#",
            ScaleKey::E => "E",
            ScaleKey::F => "F",
            ScaleKey::FSharp => "F#",
            ScaleKey::G => "G",
            ScaleKey::GSharp => "G#",
            ScaleKey::A => "A",
            ScaleKey::ASharp => "A#",
            ScaleKey::B => "B",
        }
    }
}

/// Lowercased key names, including enharmonic flat spellings.
static KEY_MAP: Lazy<BTreeMap<String, ScaleKey>> = Lazy::new(|| {
    const FLAT_ALIASES: [(&str, ScaleKey); 5] = [
        ("db", ScaleKey::CSharp),
        ("eb", ScaleKey::DSharp),
        ("gb", ScaleKey::FSharp),
        ("ab", ScaleKey::GSharp),
        ("bb", ScaleKey::ASharp),
    ];

    ScaleKey::ALL
        .iter()
        .map(|&key| (key.name().to_ascii_lowercase(), key))
        .chain(FLAT_ALIASES.iter().map(|&(name, key)| (name.to_string(), key)))
        .collect()
});

impl FromStr for ScaleKey {
    type Err = SwarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        KEY_MAP
            .get(&trimmed.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| SwarError::UnknownScaleKey(trimmed.to_string()))
    }
}

impl TryFrom<String> for ScaleKey {
    type Error = SwarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScaleKey> for String {
    fn from(key: ScaleKey) -> Self {
        key.name().to_string()
    }
}

impl fmt::Display for ScaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_midi_60_through_71() {
        let numbers: Vec<i32> = ScaleKey::ALL.iter().map(|k| k.note_number()).collect();
        assert_eq!(numbers, (60..=71).collect::<Vec<_>>());
        assert_eq!(ScaleKey::A.note_number(), 69);
    }

    #[test]
    fn parses_sharp_names_case_insensitively() {
        for key in ScaleKey::ALL {
            assert_eq!(key.name().parse::<ScaleKey>().unwrap(), key);
            assert_eq!(key.name().to_lowercase().parse::<ScaleKey>().unwrap(), key);
        }
        assert_eq!("  f# ".parse::<ScaleKey>().unwrap(), ScaleKey::FSharp);
    }

    #[test]
    fn parses_flat_aliases() {
        assert_eq!("Db".parse::<ScaleKey>().unwrap(), ScaleKey::CSharp);
        assert_eq!("Bb".parse::<ScaleKey>().unwrap(), ScaleKey::ASharp);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "H".parse::<ScaleKey>().unwrap_err();
        assert!(matches!(err, SwarError::UnknownScaleKey(ref name) if name == "H"));
        assert!("".parse::<ScaleKey>().is_err());
        assert!("Cb".parse::<ScaleKey>().is_err());
    }

    #[test]
    fn serializes_by_name() {
        assert_eq!(serde_json::to_string(&ScaleKey::GSharp).unwrap(), "\"G#\"");
        let key: ScaleKey = serde_json::from_str("\"eb\"").unwrap();
        assert_eq!(key, ScaleKey::DSharp);
        assert!(serde_json::from_str::<ScaleKey>("\"X\"").is_err());
    }
}
