//! Failure routing.
//!
//! Items that fail processing are either recorded in an append-only list or
//! physically relocated into the failed-output folder, depending on the
//! configured modes. Link modes never relocate: the original file is the
//! only copy, so only its path is recorded.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Append-only list of failed item paths.
pub const FAILED_LIST_FILE: &str = "failed_list.txt";

/// Provenance log for physically relocated items.
pub const RELOCATION_LOG_FILE: &str = "where_was_i_before_being_moved.txt";

/// Errors that can occur while routing a failed item.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The failed-output folder could not be created.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The failure list could not be opened or written.
    #[error("Failed to append to failure list: {path}")]
    ListAppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be moved into the failed folder.
    #[error("Failed to move file to failed folder: {path}")]
    MoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a failed item was routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDisposition {
    /// The path was appended to the failure list; the file was not touched.
    Listed,
    /// The file was moved into the failed folder.
    Relocated {
        /// Where the file now lives.
        destination: PathBuf,
    },
    /// A same-named file already sits in the failed folder; nothing moved.
    SkippedExisting,
    /// Neither list mode nor physical relocation is configured.
    Ignored,
}

/// Routes a failed item according to the configured modes.
///
/// List-only main mode and the link modes append the path to
/// [`FAILED_LIST_FILE`]. Physical relocation appends a provenance line to
/// [`RELOCATION_LOG_FILE`] before moving, so the original location stays
/// recoverable. Both files are opened per write and never truncated.
pub fn route_failure(file: &Path, config: &Config) -> Result<FailureDisposition, RouterError> {
    let failed_folder = &config.common.failed_output_folder;
    fs::create_dir_all(failed_folder).map_err(|source| RouterError::DirectoryCreationFailed {
        path: failed_folder.clone(),
        source,
    })?;

    if config.common.is_list_only() || config.common.placement_mode().is_link() {
        append_to_failed_list(file, failed_folder)?;
        return Ok(FailureDisposition::Listed);
    }

    if config.common.failed_move {
        return move_to_failed_folder(file, failed_folder);
    }

    Ok(FailureDisposition::Ignored)
}

fn append_to_failed_list(file: &Path, failed_folder: &Path) -> Result<(), RouterError> {
    let list_path = failed_folder.join(FAILED_LIST_FILE);
    let mut list = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&list_path)
        .map_err(|source| RouterError::ListAppendFailed {
            path: list_path.clone(),
            source,
        })?;

    writeln!(list, "{}", file.display()).map_err(|source| RouterError::ListAppendFailed {
        path: list_path.clone(),
        source,
    })?;

    info!(path = %file.display(), "added to failed list");
    Ok(())
}

fn move_to_failed_folder(
    file: &Path,
    failed_folder: &Path,
) -> Result<FailureDisposition, RouterError> {
    let file_name = match file.file_name() {
        Some(name) => name,
        None => {
            warn!(path = %file.display(), "failed item has no file name, not moved");
            return Ok(FailureDisposition::Ignored);
        }
    };

    let destination = failed_folder.join(file_name);
    if destination.exists() {
        warn!(file = %destination.display(), "file already exists in failed folder");
        return Ok(FailureDisposition::SkippedExisting);
    }

    // Record where the file came from before moving it. Best effort: a
    // missing provenance line must not block the relocation.
    let log_path = failed_folder.join(RELOCATION_LOG_FILE);
    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(mut log) => {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M");
            if let Err(err) = writeln!(
                log,
                "{timestamp} FROM[{}]TO[{}]",
                file.display(),
                destination.display()
            ) {
                warn!(path = %log_path.display(), error = %err, "failed to write relocation record");
            }
        }
        Err(err) => {
            warn!(path = %log_path.display(), error = %err, "failed to open relocation log");
        }
    }

    fs::rename(file, &destination).map_err(|source| RouterError::MoveFailed {
        path: file.to_path_buf(),
        source,
    })?;

    info!(file = %destination.display(), "moved to failed folder");
    Ok(FailureDisposition::Relocated { destination })
}
