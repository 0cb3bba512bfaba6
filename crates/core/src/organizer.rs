//! Per-item organization facade.
//!
//! Wires the folder resolver, placement engine, failure router and janitor
//! behind one object built from the configuration, which is how the
//! surrounding batch driver consumes this crate: one `organize` call per
//! item, `route_failure` when any stage of the driver's pipeline gives up
//! on an item, and one `prune_empty_dirs` sweep per batch.
//!
//! Each component also stands alone with explicit parameters; the facade
//! only carries the configuration so callers don't have to.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::failed::{self, FailureDisposition, RouterError};
use crate::janitor;
use crate::layout::{resolve_folder, LayoutError};
use crate::metadata::MediaRecord;
use crate::placer::{FsPlacer, Placer, PlacementOutcome, PlacementRequest, PlacerError};

/// Errors surfaced while organizing a single item.
///
/// An error here concerns one item only; the batch driver is expected to
/// record it and continue with the next item.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The destination folder could not be resolved or created.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The file could not be placed at the destination.
    #[error(transparent)]
    Placement(#[from] PlacerError),
}

/// Organizes media items on disk according to the configuration.
pub struct Organizer {
    config: Config,
    placer: FsPlacer,
}

impl Organizer {
    /// Creates an organizer for the given configuration.
    pub fn new(config: Config) -> Self {
        let placer = FsPlacer::new(config.common.placement_mode());
        Self { config, placer }
    }

    /// Resolves the destination folder for `record` and places `source`
    /// there under its current file name.
    pub fn organize(
        &self,
        source: &Path,
        record: &MediaRecord,
    ) -> Result<PlacementOutcome, OrganizeError> {
        let folder = resolve_folder(record, &self.config)?;
        let destination = match source.file_name() {
            Some(name) => folder.join(name),
            None => folder,
        };

        debug!(
            source = %source.display(),
            destination = %destination.display(),
            "placing item"
        );

        let outcome = self.placer.place(&PlacementRequest {
            source: source.to_path_buf(),
            destination,
        })?;
        Ok(outcome)
    }

    /// Routes a file whose processing failed elsewhere in the pipeline.
    pub fn route_failure(&self, file: &Path) -> Result<FailureDisposition, RouterError> {
        failed::route_failure(file, &self.config)
    }

    /// Removes directories left empty under the library root. Run once per
    /// batch.
    pub fn prune_empty_dirs(&self) -> usize {
        janitor::remove_empty_dirs(&self.config.common.success_output_folder)
    }
}
