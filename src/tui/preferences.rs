//! Viewer preferences kept between sessions.

use std::{fs, io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ThemeMode;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Preferences {
    /// Read saved preferences; a missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), "Cannot read preferences: {e}");
                return Self::default();
            }
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %path.display(), "Ignoring malformed preferences: {e}");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), theme = self.theme.label(), "Saved preferences");
        Ok(())
    }
}
