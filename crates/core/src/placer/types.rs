//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How files enter the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Move the source into the library.
    Move,
    /// Leave the source in place and soft-link it from the library.
    SoftLink,
    /// Hard-link into the library, falling back to a soft link.
    HardLink,
}

impl PlacementMode {
    /// Maps the configuration's integer link mode to a placement mode.
    ///
    /// Unrecognized values behave as move mode.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::SoftLink,
            2 => Self::HardLink,
            _ => Self::Move,
        }
    }

    /// True for the soft- and hard-link modes.
    pub fn is_link(self) -> bool {
        !matches!(self, Self::Move)
    }
}

/// A single file placement request.
#[derive(Debug, Clone)]
pub struct PlacementRequest {
    /// Source file path.
    pub source: PathBuf,
    /// Destination file path.
    pub destination: PathBuf,
}

/// The strategy that ultimately placed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Atomic rename.
    Moved,
    /// Rename failed; the file was copied and the source deleted.
    Copied,
    /// Hard link.
    HardLinked,
    /// Symbolic link with a destination-relative target.
    SoftLinkedRelative,
    /// Symbolic link with an absolute target.
    SoftLinkedAbsolute,
}

/// Result of a successful placement. Logging payload only; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// The strategy that succeeded.
    pub strategy: PlacementStrategy,
    /// Final destination path.
    pub destination: PathBuf,
}
