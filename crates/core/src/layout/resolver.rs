//! Destination folder resolution.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::metadata::{Field, MediaRecord};

use super::error::LayoutError;
use super::rule::LocationRule;
use super::sanitize::sanitize;

/// Builds the rule-derived folder string for a record, before it is joined
/// under the library root.
///
/// Applies the multi-performer and title-length rewrites, then guarantees
/// the result is rooted (`.`, `/` or `\` prefix) so the later join cannot
/// escape the output tree by accident.
pub fn build_folder_name(record: &MediaRecord, config: &Config) -> String {
    let rule = LocationRule::parse(&config.name_rule.location_rule);
    let mut folder = rule.evaluate(record);
    debug!(folder = %folder, "evaluated location rule");

    // A performer string past the threshold is a joined multi-performer
    // list, not a name worth a folder of its own.
    let threshold = config.name_rule.multi_performer_threshold;
    if threshold > 0
        && rule.references(Field::Actor)
        && record.actor.chars().count() > threshold
    {
        folder = folder.replace(&record.actor, &config.name_rule.multi_performer_label);
    }

    let max_title = config.name_rule.max_title_len;
    if max_title > 0
        && rule.references(Field::Title)
        && record.title.chars().count() > max_title
    {
        let short: String = record.title.chars().take(max_title).collect();
        folder = folder.replace(&record.title, &short);
    }

    if !folder.starts_with('.') && !folder.starts_with(['/', '\\']) {
        folder.insert_str(0, "./");
    }

    folder
}

/// Resolves and creates the destination folder for a record.
///
/// The rule-derived path is preferred; when its directories cannot be
/// created the resolver retries with `<success root>/<identifier>`. Only the
/// fallback's failure is fatal for the item.
pub fn resolve_folder(record: &MediaRecord, config: &Config) -> Result<PathBuf, LayoutError> {
    let folder = build_folder_name(record, config);

    // PathBuf::join would replace the root outright if the rule produced a
    // rooted path; everything nests under the success root.
    let joined = config
        .common
        .success_output_folder
        .join(folder.trim_start_matches(['/', '\\']));
    let full_path = sanitize(&normalize(&joined), &config.escape.literals);

    match fs::create_dir_all(&full_path) {
        Ok(()) => Ok(full_path),
        Err(err) => {
            warn!(
                path = %full_path.display(),
                error = %err,
                "falling back to identifier-only folder"
            );
            let fallback = sanitize(
                &config.common.success_output_folder.join(&record.number),
                &config.escape.literals,
            );
            fs::create_dir_all(&fallback).map_err(|source| {
                LayoutError::DirectoryCreationFailed {
                    path: fallback.clone(),
                    source,
                }
            })?;
            Ok(fallback)
        }
    }
}

/// Lexically normalizes a path: drops `.` components, folds `..` into the
/// preceding component and collapses redundant separators.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn config_with_root(root: &Path) -> Config {
        let mut config = Config::default();
        config.common.success_output_folder = root.to_path_buf();
        config
    }

    fn record() -> MediaRecord {
        MediaRecord {
            number: "ABC-123".to_string(),
            title: "Some Title".to_string(),
            actor: "Jane Doe".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_creates_rule_folder() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());

        let resolved = resolve_folder(&record(), &config).unwrap();

        assert_eq!(resolved, temp.path().join("Jane Doe").join("ABC-123"));
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_output_is_normalized() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());

        let resolved = resolve_folder(&record(), &config).unwrap();

        assert!(!resolved.to_string_lossy().contains("/./"));
        assert!(resolved.starts_with(temp.path()));
    }

    #[test]
    fn test_multi_performer_label_substitution() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());

        let mut rec = record();
        rec.actor = "A, ".repeat(50); // 150 characters

        let resolved = resolve_folder(&rec, &config).unwrap();

        assert_eq!(
            resolved,
            temp.path().join("Multiple Performers").join("ABC-123")
        );
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_short_performer_kept_verbatim() {
        let temp = TempDir::new().unwrap();
        let config = config_with_root(temp.path());

        let folder = build_folder_name(&record(), &config);
        assert!(folder.contains("Jane Doe"));
    }

    #[test]
    fn test_title_truncation() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_root(temp.path());
        config.name_rule.location_rule = "title + '/' + number".to_string();
        config.name_rule.max_title_len = 4;

        let resolved = resolve_folder(&record(), &config).unwrap();

        assert_eq!(resolved, temp.path().join("Some").join("ABC-123"));
    }

    #[test]
    fn test_title_untouched_without_bound() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_root(temp.path());
        config.name_rule.location_rule = "title + '/' + number".to_string();
        config.name_rule.max_title_len = 0;

        let resolved = resolve_folder(&record(), &config).unwrap();

        assert_eq!(resolved, temp.path().join("Some Title").join("ABC-123"));
    }

    #[test]
    fn test_sanitizes_escape_literals() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_root(temp.path());
        config.escape.literals = "()".to_string();

        let mut rec = record();
        rec.actor = "Jane (Doe)".to_string();

        let resolved = resolve_folder(&rec, &config).unwrap();

        assert_eq!(resolved, temp.path().join("Jane Doe").join("ABC-123"));
    }

    #[test]
    fn test_fallback_to_identifier_folder() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_root(temp.path());
        config.name_rule.location_rule = "'blocked' + '/' + number".to_string();

        // A file where the rule folder should go forces the fallback.
        std::fs::write(temp.path().join("blocked"), "in the way").unwrap();

        let resolved = resolve_folder(&record(), &config).unwrap();

        assert_eq!(resolved, temp.path().join("ABC-123"));
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/library/./Jane/../John")),
            PathBuf::from("/library/John")
        );
        assert_eq!(normalize(Path::new("a/./b")), PathBuf::from("a/b"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
    }
}
