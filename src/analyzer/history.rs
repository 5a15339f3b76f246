use crate::analyzer::tags::ReleaseMap;
use crate::domain::{CommitClassifier, PathFilter, Severity};
use crate::error::Result;
use crate::git::Repository;
use semver::Version;

/// Outcome of scanning history back to the most recent release
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Version of the most recent release reachable from head,
    /// or 0.0.0 when no release has ever happened
    pub previous_version: Version,
    /// One severity per commit between head and the release boundary;
    /// order carries no meaning
    pub severities: Vec<Severity>,
}

/// Walk history backward from head, collecting one severity per commit
/// until the release boundary.
///
/// The boundary is the first commit present in `releases`; its own message
/// is not classified. Commits whose message cannot be classified count as
/// [Severity::Chore]. When no walked commit is tagged, the previous version
/// is 0.0.0.
///
/// # Errors
/// * [crate::error::NextVersionError::NoCommitsFound] - the repository has no commits
/// * Any repository access failure, propagated verbatim
pub fn scan_since_last_release<R: Repository>(
    repo: &R,
    releases: &ReleaseMap,
    classifier: &CommitClassifier,
    path_filter: Option<&PathFilter>,
) -> Result<ScanResult> {
    let head = repo.head_oid()?;

    let mut severities = Vec::new();
    let mut previous_version = None;

    for commit in repo.walk_commits(head, path_filter)? {
        let commit = commit?;

        if let Some(version) = releases.get(&commit.id) {
            previous_version = Some(version.clone());
            break;
        }

        severities.push(
            classifier
                .classify(&commit.message)
                .unwrap_or(Severity::Chore),
        );
    }

    Ok(ScanResult {
        previous_version: previous_version.unwrap_or_else(|| Version::new(0, 0, 0)),
        severities,
    })
}
