// swar-core/src/lib.rs

//! The core logic for the swar detector.
//! This crate classifies a detected pitch into a swar of Bilawal thaat, its
//! saptak and a clarity verdict relative to a chosen Sa. It is completely
//! headless: audio capture and pitch extraction happen elsewhere and hand
//! it plain frequencies.

pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod scale;
pub mod swar;
pub mod tuning;

pub use classifier::{Classification, MIN_AUDIBLE_FREQUENCY, PitchClassifier, PitchReading, classify};
pub use config::SessionConfig;
pub use display::{DisplayColor, Readout};
pub use error::{SwarError, SwarResult};
pub use scale::ScaleKey;
pub use swar::{Clarity, Saptak, Swar};
