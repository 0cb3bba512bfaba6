//! Path sanitization.

use std::path::{Path, PathBuf};

/// Removes every character in `literals` from the path.
///
/// The separators `/` and `\` always survive, whatever the configured set
/// says, so sanitizing never changes the directory structure of a path.
/// Idempotent.
pub fn sanitize(path: &Path, literals: &str) -> PathBuf {
    let cleaned: String = path
        .to_string_lossy()
        .chars()
        .filter(|c| matches!(c, '/' | '\\') || !literals.contains(*c))
        .collect();

    PathBuf::from(cleaned)
}
