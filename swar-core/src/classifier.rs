//! # Pitch Classifier Module
//!
//! Maps a detected frequency, given a tonic, onto the nearest swar of
//! Bilawal thaat, the saptak it falls in and how well it is tuned.
//!
//! ## Algorithm
//! 1. Convert the frequency to a continuous note number and take its
//!    distance `d` from Sa.
//! 2. Split `d` into an octave index `k = floor(d / 12)` and an in-octave
//!    position `m` in `[0, 12)`.
//! 3. Linear scan over the swar offsets plus a virtual Sa at 12 using
//!    circular distance, first candidate wins on ties.
//! 4. The virtual Sa moves the result into the next saptak.
//! 5. Measure the cents error against the exact pitch of the resolved swar.
//!
//! Classification is a pure function: no state is kept between samples and
//! it is safe to call from any number of threads.

use serde::Serialize;
use std::borrow::Cow;

use crate::scale::ScaleKey;
use crate::swar::{Clarity, Saptak, Swar};
use crate::tuning::{
    SEMITONES_PER_OCTAVE, cents_between, frequency_to_note_number, note_number_to_frequency,
};

/// Frequencies at or below this value are treated as silence.
pub const MIN_AUDIBLE_FREQUENCY: f64 = 20.0;

/// Semitone candidates scanned for the nearest swar. The last entry is Sa of
/// the next octave.
const CANDIDATES: [f64; 8] = [0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0, 12.0];

/// Index of the next-octave Sa in [`CANDIDATES`].
const NEXT_SA: usize = 7;

/// A classified pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub swar: Swar,
    pub saptak: Saptak,
    pub clarity: Clarity,
    /// The input frequency in Hz.
    pub frequency: f64,
    /// Exact frequency of the resolved swar in its saptak.
    pub target_frequency: f64,
    /// Signed deviation from `target_frequency` (positive = sharp).
    pub cents: f64,
}

impl Classification {
    pub fn abs_cents(&self) -> f64 {
        self.cents.abs()
    }

    pub fn swar_name(&self) -> &'static str {
        self.swar.name()
    }

    pub fn saptak_label(&self) -> Cow<'static, str> {
        self.saptak.label()
    }
}

/// Outcome of classifying one frequency sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PitchReading {
    /// No usable pitch: silence, sub-audible, negative or non-finite input.
    NoSignal,
    Detected(Classification),
}

impl PitchReading {
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            PitchReading::Detected(c) => Some(c),
            PitchReading::NoSignal => None,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, PitchReading::Detected(_))
    }
}

/// Classifies `frequency` against the tonic note number `tonic`.
///
/// `tonic` is not validated; the scale selector normally supplies 60..=71
/// but any note number works as a reference.
///
/// # Arguments
/// * `frequency` - Detected frequency in Hz, as reported by a pitch detector
/// * `tonic` - Note number of Sa (A4 = 69)
///
/// # Returns
/// * `PitchReading::NoSignal` - Frequency at or below 20 Hz, NaN or infinite
/// * `PitchReading::Detected(c)` - Nearest swar, its saptak, clarity and cents
pub fn classify(frequency: f64, tonic: i32) -> PitchReading {
    // `>` is false for NaN, so NaN falls through to NoSignal as well.
    if !(frequency > MIN_AUDIBLE_FREQUENCY && frequency.is_finite()) {
        return PitchReading::NoSignal;
    }

    let tonic_note = f64::from(tonic);
    let d = frequency_to_note_number(frequency) - tonic_note;
    let octave = (d / SEMITONES_PER_OCTAVE).floor();
    let m = d - SEMITONES_PER_OCTAVE * octave;

    let (swar, octave_adjust) = find_closest_swar(m);
    let k = octave + f64::from(octave_adjust);

    let exact_note = tonic_note + SEMITONES_PER_OCTAVE * k + f64::from(swar.semitone_offset());
    let target_frequency = note_number_to_frequency(exact_note);
    let cents = cents_between(frequency, target_frequency);

    PitchReading::Detected(Classification {
        swar,
        saptak: Saptak(k as i32),
        clarity: Clarity::from_cents(cents.abs()),
        frequency,
        target_frequency,
        cents,
    })
}

/// Circular distance in semitones between two in-octave positions.
fn circular_distance(m: f64, s: f64) -> f64 {
    let diff = (m - s).abs();
    diff.min(SEMITONES_PER_OCTAVE - diff)
}

/// Finds the swar nearest to the in-octave position `m` (`0 <= m < 12`).
///
/// Returns the swar and the saptak adjustment (1 when the nearest pitch is
/// Sa of the next octave). The exact midpoint between Ni and the next Sa
/// (`m = 11.5`) resolves to Sa of the next octave.
fn find_closest_swar(m: f64) -> (Swar, i32) {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &s) in CANDIDATES.iter().enumerate() {
        let distance = circular_distance(m, s);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }

    // Sa at 0 and at 12 are always the same circular distance away, so the
    // first-wins scan lands on 0. Above the half-octave the next Sa is the
    // one actually nearest.
    if best == NEXT_SA || (best == 0 && m > SEMITONES_PER_OCTAVE / 2.0) {
        (Swar::Sa, 1)
    } else {
        (Swar::ALL[best], 0)
    }
}

/// A classifier bound to the tonic chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchClassifier {
    tonic: i32,
}

impl PitchClassifier {
    pub fn new(key: ScaleKey) -> Self {
        Self::with_tonic(key.note_number())
    }

    pub fn with_tonic(tonic: i32) -> Self {
        Self { tonic }
    }

    pub fn tonic(&self) -> i32 {
        self.tonic
    }

    pub fn classify(&self, frequency: f64) -> PitchReading {
        classify(frequency, self.tonic)
    }
}

impl Default for PitchClassifier {
    fn default() -> Self {
        Self::new(ScaleKey::default())
    }
}

impl From<ScaleKey> for PitchClassifier {
    fn from(key: ScaleKey) -> Self {
        Self::new(key)
    }
}
