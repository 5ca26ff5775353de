//! # Equal Temperament Module
//!
//! Conversions between frequencies in Hz and continuous MIDI-style note
//! numbers, plus cent deviation. Concert pitch is A4 = 440 Hz = note 69.
//!
//! The classifier goes through these functions for every step, so a
//! frequency built with [`note_number_to_frequency`] classifies back to the
//! same note with exactly zero cents.

/// Reference frequency of A4 in Hz.
pub const CONCERT_A_HZ: f64 = 440.0;

/// Note number of A4.
pub const CONCERT_A_NOTE: f64 = 69.0;

/// Semitones in one octave.
pub const SEMITONES_PER_OCTAVE: f64 = 12.0;

/// Converts a frequency to a continuous note number.
///
/// `n = 69 + 12 * log2(freq / 440)`. The caller must pass a positive,
/// finite frequency.
///
/// # Arguments
/// * `freq` - Frequency in Hz
///
/// # Returns
/// * Note number, fractional between semitones (440 Hz = 69.0)
pub fn frequency_to_note_number(freq: f64) -> f64 {
    CONCERT_A_NOTE + SEMITONES_PER_OCTAVE * (freq / CONCERT_A_HZ).log2()
}

/// Converts a (possibly fractional) note number to its frequency in Hz.
pub fn note_number_to_frequency(note: f64) -> f64 {
    CONCERT_A_HZ * 2.0_f64.powf((note - CONCERT_A_NOTE) / SEMITONES_PER_OCTAVE)
}

/// Calculates the deviation from a target frequency in cents.
///
/// Cents are a logarithmic unit of pitch measurement where:
/// - 100 cents = 1 semitone
/// - 1200 cents = 1 octave
/// - Positive values indicate sharpness, negative values indicate flatness
///
/// # Arguments
/// * `freq` - Measured frequency in Hz
/// * `target_freq` - Target frequency in Hz
///
/// # Returns
/// * Cent deviation (positive = sharp, negative = flat)
pub fn cents_between(freq: f64, target_freq: f64) -> f64 {
    1200.0 * (freq / target_freq).log2()
}
