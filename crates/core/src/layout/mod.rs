//! Destination layout: rule evaluation, path sanitization and folder
//! resolution.
//!
//! The resolver turns a metadata record plus the configured location rule
//! into a created, sanitized directory under the library root:
//!
//! ```text
//! location rule --evaluate--> folder string --rewrites--> rooted path
//!     --join+normalize--> absolute path --sanitize--> mkdir (with
//!     identifier-only fallback)
//! ```

mod error;
mod resolver;
mod rule;
mod sanitize;

pub use error::LayoutError;
pub use resolver::{build_folder_name, resolve_folder};
pub use rule::LocationRule;
pub use sanitize::sanitize;
