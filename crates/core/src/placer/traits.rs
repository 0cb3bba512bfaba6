//! Trait definitions for the placer module.

use super::error::PlacerError;
use super::types::{PlacementOutcome, PlacementRequest};

/// A placer that can put files at their final destinations.
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Places a single file according to the request.
    ///
    /// The destination must not exist yet; implementations fail before any
    /// I/O when it does.
    fn place(&self, request: &PlacementRequest) -> Result<PlacementOutcome, PlacerError>;
}
