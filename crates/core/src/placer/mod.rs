//! Placer module for putting media files at their final destinations.
//!
//! This module provides the `Placer` trait and the file system
//! implementation used to move or link an item into the library.
//!
//! # Features
//!
//! - Atomic moves with automatic fallback to copy-then-delete
//! - Soft links with a destination-relative target, falling back to an
//!   absolute target
//! - Hard links with automatic fallback to soft links
//! - Automatic parent directory creation
//! - Refusal to overwrite an existing destination
//!
//! # Example
//!
//! ```ignore
//! use mediashelf_core::placer::{FsPlacer, Placer, PlacementMode, PlacementRequest};
//!
//! let placer = FsPlacer::new(PlacementMode::Move);
//!
//! let outcome = placer.place(&PlacementRequest {
//!     source: PathBuf::from("/downloads/abc-123.mp4"),
//!     destination: PathBuf::from("/library/Jane Doe/ABC-123/abc-123.mp4"),
//! })?;
//!
//! println!("placed via {:?} at {}", outcome.strategy, outcome.destination.display());
//! ```

mod error;
mod fs_placer;
mod traits;
mod types;

pub use error::PlacerError;
pub use fs_placer::FsPlacer;
pub use traits::Placer;
pub use types::{PlacementMode, PlacementOutcome, PlacementRequest, PlacementStrategy};
