//! Error types for the layout module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a destination folder.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Neither the rule-derived path nor the identifier fallback could be
    /// created.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
