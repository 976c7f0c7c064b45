//! Save/load for the loft.
//!
//! JSON is the host-facing save format (the loft round-trips every locus
//! pair exactly, so resolved phenotypes survive reload); bincode covers
//! compact binary snapshots. Saves carry a version number checked on load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

use crate::loft::Loft;

/// Version number for the save format (increment when the layout changes).
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the loft.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub loft: Loft,
}

/// Why a save could not be written or read back.
#[derive(Debug)]
pub enum SaveError {
    Json(serde_json::Error),
    Binary(bincode::Error),
    VersionMismatch { found: u32, expected: u32 },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "JSON save error: {err}"),
            Self::Binary(err) => write!(f, "binary save error: {err}"),
            Self::VersionMismatch { found, expected } => {
                write!(f, "save version {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Binary(err) => Some(err),
            Self::VersionMismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<bincode::Error> for SaveError {
    fn from(err: bincode::Error) -> Self {
        Self::Binary(err)
    }
}

fn check_version(found: u32) -> Result<(), SaveError> {
    if found != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            found,
            expected: SAVE_VERSION,
        });
    }
    Ok(())
}

/// Serialize the loft to a JSON save string.
pub fn to_json(loft: &Loft) -> Result<String, SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        loft: loft.clone(),
    };
    Ok(serde_json::to_string(&data)?)
}

/// Load a loft from a JSON save string.
pub fn from_json(json: &str) -> Result<Loft, SaveError> {
    let data: SaveData = serde_json::from_str(json)?;
    check_version(data.version)?;
    Ok(data.loft)
}

/// Write a compact binary snapshot.
pub fn save_binary(loft: &Loft, writer: impl Write) -> Result<(), SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        loft: loft.clone(),
    };
    Ok(bincode::serialize_into(writer, &data)?)
}

/// Read a binary snapshot back.
pub fn load_binary(reader: impl Read) -> Result<Loft, SaveError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    check_version(data.version)?;
    Ok(data.loft)
}
