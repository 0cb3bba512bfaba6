//! Empty-directory cleanup.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

/// Removes every empty directory under `root`, leaving `root` itself alone.
///
/// Children are visited before their parents, so chains of nested empty
/// directories collapse in a single pass. Walk and removal errors on
/// individual entries are skipped; this is a best-effort sweep, not a
/// correctness-critical operation. Returns the number of directories
/// removed.
pub fn remove_empty_dirs(root: &Path) -> usize {
    let mut removed = 0;

    for entry in WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        let is_empty = match fs::read_dir(entry.path()) {
            Ok(mut entries) => entries.next().is_none(),
            Err(_) => continue,
        };

        if is_empty {
            match fs::remove_dir(entry.path()) {
                Ok(()) => {
                    info!(path = %entry.path().display(), "removed empty folder");
                    removed += 1;
                }
                Err(err) => {
                    debug!(
                        path = %entry.path().display(),
                        error = %err,
                        "failed to remove empty folder"
                    );
                }
            }
        }
    }

    removed
}
