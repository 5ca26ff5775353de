//! Session configuration.
//!
//! The scale key and display options for a session, saved to and loaded
//! from a small JSON file so a performer does not have to pick the key on
//! every start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::classifier::PitchClassifier;
use crate::error::SwarResult;
use crate::scale::ScaleKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key chosen as Sa.
    pub scale: ScaleKey,
    /// Show the signed cents deviation next to the swar.
    pub show_cents: bool,
    /// Emit one JSON readout per sample instead of text.
    pub json: bool,
}

impl SessionConfig {
    pub fn load(path: &Path) -> SwarResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SessionConfig = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), scale = %config.scale, "loaded session config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> SwarResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "saved session config");
        Ok(())
    }

    pub fn classifier(&self) -> PitchClassifier {
        PitchClassifier::new(self.scale)
    }
}
