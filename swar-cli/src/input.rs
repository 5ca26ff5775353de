//! # Sample Input Module
//!
//! Reads frequency samples produced by an external pitch detector, one value
//! in Hz per line, and streams them to the classification loop over a
//! channel from a dedicated thread.

use crossbeam_channel::{Receiver, bounded};
use std::io::BufRead;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Capacity of the sample channel between the reader and the main loop.
pub const CHANNEL_CAPACITY: usize = 64;

/// Parses one input line into a frequency.
///
/// Returns `None` for blank lines and `#` comments. Unparsable text is an
/// error so the caller can report it.
pub fn parse_sample(line: &str) -> Option<Result<f64, std::num::ParseFloatError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    // Detectors often print a unit suffix.
    let value = trimmed
        .strip_suffix("Hz")
        .or_else(|| trimmed.strip_suffix("hz"))
        .unwrap_or(trimmed)
        .trim_end();
    Some(value.parse())
}

/// Starts a thread that reads samples from `reader` until end of input.
///
/// The returned receiver disconnects once the reader is exhausted, which ends
/// the classification loop.
pub fn spawn_reader<R>(reader: R) -> (Receiver<f64>, JoinHandle<()>)
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = bounded(CHANNEL_CAPACITY);

    let handle = thread::spawn(move || {
        debug!("[INPUT] Reader thread started");
        // Split on raw bytes so a line that is not UTF-8 is skipped like any
        // other unparsable line instead of ending the stream.
        for (number, bytes) in reader.split(b'\n').enumerate() {
            let bytes = match bytes {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("[INPUT] Stopping after read error: {}", e);
                    break;
                }
            };
            let line = String::from_utf8_lossy(&bytes);

            match parse_sample(&line) {
                Some(Ok(frequency)) => {
                    // The main loop hung up; nothing left to do.
                    if sender.send(frequency).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => warn!("[INPUT] Skipping line {} ({:?}): {}", number + 1, line, e),
                None => {}
            }
        }
        debug!("[INPUT] Reader thread finished");
    });

    (receiver, handle)
}
