use std::{error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult};

use crate::{carousel::ConfigError, deck::DeckError};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Deck(DeckError),
    Config(ConfigError),
    DeckFile { path: PathBuf, source: Box<Self> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Deck(e) => write!(f, "Invalid deck: {e}"),
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::DeckFile { path, source } => {
                write!(f, "Failed to load deck {}: {source}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Deck(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::DeckFile { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<DeckError> for Error {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
