//! Project auto-detection from the repository name.

use regex::Regex;
use tracing::{debug, warn};

use crate::ProjectMapping;

#[cfg(test)]
#[path = "project_detector_tests.rs"]
mod tests;

/// Picks the project label for `repo_name` from an ordered `project_map`.
///
/// Entries are tried in order and, within an entry, patterns are tried in
/// order. Each pattern is a regular expression searched for anywhere in the
/// repository name (anchor it with `^`/`$` for a full match). The first match
/// wins and yields that entry's `name`, or an empty string when the entry has
/// none. Patterns that fail to compile are skipped.
///
/// Returns an empty string when nothing matches.
///
/// # Examples
///
/// ```rust
/// use config_manager::{detect_project, ProjectMapping};
///
/// let map = vec![ProjectMapping {
///     name: Some("Storage".to_string()),
///     repos: vec!["-storage$".to_string()],
/// }];
///
/// assert_eq!(detect_project("acapy-storage", &map), "Storage");
/// assert_eq!(detect_project("acapy-plugins", &map), "");
/// ```
pub fn detect_project(repo_name: &str, project_map: &[ProjectMapping]) -> String {
    for entry in project_map {
        for pattern in &entry.repos {
            let regex = match Regex::new(pattern) {
                Ok(regex) => regex,
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "Skipping invalid project_map pattern");
                    continue;
                }
            };

            if regex.is_match(repo_name) {
                let project = entry.name.clone().unwrap_or_default();
                debug!(repo = repo_name, pattern = %pattern, project = %project, "Detected project");
                return project;
            }
        }
    }

    debug!(repo = repo_name, "No project_map entry matched");
    String::new()
}
