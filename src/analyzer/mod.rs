//! Release-boundary analysis: tag resolution and history scanning

pub mod history;
pub mod tags;

pub use history::{scan_since_last_release, ScanResult};
pub use tags::{resolve_release_tags, ReleaseMap};

use crate::domain::{CommitClassifier, PathFilter};
use crate::error::Result;
use crate::git::Repository;
use regex::Regex;

/// Resolve release tags, then scan history from head back to the most
/// recent release, classifying every commit in between.
pub fn severities_since_last_release<R: Repository>(
    repo: &R,
    classifier: &CommitClassifier,
    path_filter: Option<&PathFilter>,
    tags_filter: Option<&Regex>,
    version_pattern: Option<&Regex>,
) -> Result<ScanResult> {
    let releases = resolve_release_tags(repo, tags_filter, version_pattern)?;
    scan_since_last_release(repo, &releases, classifier, path_filter)
}
