//! File system placer implementation.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::PlacerError;
use super::traits::Placer;
use super::types::{PlacementMode, PlacementOutcome, PlacementRequest, PlacementStrategy};

#[cfg(unix)]
use std::os::unix::fs::symlink;
#[cfg(windows)]
use std::os::windows::fs::symlink_file as symlink;

/// File system based placer.
///
/// Each mode is an ordered chain of strategies: move falls back to
/// copy-then-delete, hard link falls back to soft link, and soft link
/// prefers a destination-relative target over an absolute one. Only the
/// last strategy's failure surfaces to the caller.
pub struct FsPlacer {
    mode: PlacementMode,
}

impl FsPlacer {
    /// Creates a placer operating in the given mode.
    pub fn new(mode: PlacementMode) -> Self {
        Self { mode }
    }

    /// Moves a file, falling back to copy-then-delete when rename fails.
    fn move_file(source: &Path, destination: &Path) -> Result<PlacementStrategy, PlacerError> {
        match fs::rename(source, destination) {
            Ok(()) => {
                info!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "moved file"
                );
                Ok(PlacementStrategy::Moved)
            }
            Err(err) => {
                // Rename cannot cross filesystems (EXDEV); copy instead.
                debug!(error = %err, "rename failed, copying");
                Self::copy_and_delete(source, destination)
            }
        }
    }

    /// Copies the source to the destination, then deletes the source.
    ///
    /// `fs::copy` carries the source's permission bits over. A failed copy
    /// removes the partial destination before surfacing; a failed source
    /// delete after a successful copy is downgraded to a warning because the
    /// data is already safe at the destination.
    fn copy_and_delete(
        source: &Path,
        destination: &Path,
    ) -> Result<PlacementStrategy, PlacerError> {
        if let Err(error) = fs::copy(source, destination) {
            if let Err(cleanup_err) = fs::remove_file(destination) {
                if cleanup_err.kind() != io::ErrorKind::NotFound {
                    warn!(
                        path = %destination.display(),
                        error = %cleanup_err,
                        "failed to remove partial copy"
                    );
                }
            }
            return Err(PlacerError::copy_failed(
                source.to_path_buf(),
                destination.to_path_buf(),
                error,
            ));
        }

        if let Err(err) = fs::remove_file(source) {
            warn!(
                path = %source.display(),
                error = %err,
                "failed to delete source after copy"
            );
        }

        info!(
            source = %source.display(),
            destination = %destination.display(),
            "copied and deleted file"
        );
        Ok(PlacementStrategy::Copied)
    }

    /// Creates a symbolic link at the destination pointing back at the
    /// source.
    ///
    /// A destination-relative target is preferred so links survive the
    /// library being remounted under a different root; an absolute target is
    /// the fallback.
    fn soft_link(source: &Path, destination: &Path) -> Result<PlacementStrategy, PlacerError> {
        if let Some(relative) = destination
            .parent()
            .and_then(|dir| relative_path(dir, source))
        {
            match symlink(&relative, destination) {
                Ok(()) => {
                    info!(
                        destination = %destination.display(),
                        target = %relative.display(),
                        "created soft link"
                    );
                    return Ok(PlacementStrategy::SoftLinkedRelative);
                }
                Err(err) => {
                    debug!(error = %err, "relative soft link failed, trying absolute");
                }
            }
        }

        let absolute = std::path::absolute(source).map_err(|error| {
            PlacerError::link_failed(source.to_path_buf(), destination.to_path_buf(), error)
        })?;
        symlink(&absolute, destination).map_err(|error| {
            PlacerError::link_failed(source.to_path_buf(), destination.to_path_buf(), error)
        })?;

        info!(
            destination = %destination.display(),
            target = %absolute.display(),
            "created soft link"
        );
        Ok(PlacementStrategy::SoftLinkedAbsolute)
    }

    /// Hard-links the source at the destination, falling back to a soft link
    /// on any failure (cross-device, unsupported filesystem, ...).
    fn hard_link(source: &Path, destination: &Path) -> Result<PlacementStrategy, PlacerError> {
        match fs::hard_link(source, destination) {
            Ok(()) => {
                info!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "created hard link"
                );
                Ok(PlacementStrategy::HardLinked)
            }
            Err(err) => {
                debug!(error = %err, "hard link failed, trying soft link");
                Self::soft_link(source, destination)
            }
        }
    }
}

impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    fn place(&self, request: &PlacementRequest) -> Result<PlacementOutcome, PlacerError> {
        let source = request.source.as_path();
        let destination = request.destination.as_path();

        // symlink_metadata so a dangling link still counts as occupied.
        if destination.symlink_metadata().is_ok() {
            return Err(PlacerError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source_err| {
                PlacerError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: source_err,
                }
            })?;
        }

        let strategy = match self.mode {
            PlacementMode::Move => Self::move_file(source, destination)?,
            PlacementMode::SoftLink => Self::soft_link(source, destination)?,
            PlacementMode::HardLink => Self::hard_link(source, destination)?,
        };

        Ok(PlacementOutcome {
            strategy,
            destination: destination.to_path_buf(),
        })
    }
}

/// Computes the lexical path from the directory `from` to `to`.
///
/// Returns `None` when the two cannot be related without touching the
/// filesystem: mixed absolute/relative inputs, diverging Windows prefixes,
/// or `..`/`.` components left in `from` past the common prefix.
fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    if from.is_absolute() != to.is_absolute() {
        return None;
    }

    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for component in &from[common..] {
        match component {
            Component::Normal(_) => relative.push(".."),
            _ => return None,
        }
    }
    for component in &to[common..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    Some(relative)
}
