use crate::domain::version::{parse_version, tag_specificity};
use crate::error::{NextVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use regex::Regex;
use semver::Version;
use std::collections::HashMap;

/// Resolved release version per commit
pub type ReleaseMap = HashMap<Oid, Version>;

/// A tag surviving filtering and version parsing, not yet reconciled with
/// other tags on the same commit
#[derive(Debug, Clone)]
struct TagCandidate {
    original_name: String,
    version: Version,
}

/// Whether two versions denote the same release at different levels of
/// precision rather than genuinely different releases.
///
/// "v4", "v4.5" and "v4.5.14" all describe release 4.5.14; "v4.1.0" and
/// "v4.2.0" do not describe any common release.
fn are_compatible_granularities(left: &Version, right: &Version) -> bool {
    if left == right {
        return true;
    }

    if left.major != right.major {
        return false;
    }

    // Major-only tags ("v4" parsed as 4.0.0) are compatible with anything
    // sharing their major
    if (left.minor == 0 && left.patch == 0) || (right.minor == 0 && right.patch == 0) {
        return true;
    }

    if left.minor == right.minor {
        // Major.minor tags ("v4.5" parsed as 4.5.0)
        if left.patch == 0 || right.patch == 0 {
            return true;
        }
        return left.patch == right.patch;
    }

    false
}

/// Pick the candidate whose tag name carries the most '.' separators;
/// ties go to the earliest in input order.
fn select_most_specific(candidates: &[TagCandidate]) -> Version {
    let mut most_specific = &candidates[0];
    let mut max_specificity = tag_specificity(&most_specific.original_name);

    for candidate in &candidates[1..] {
        let specificity = tag_specificity(&candidate.original_name);
        if specificity > max_specificity {
            most_specific = candidate;
            max_specificity = specificity;
        }
    }

    most_specific.version.clone()
}

/// Build the release map: one resolved semantic version per tagged commit.
///
/// When multiple tags exist on the same commit, granularity variations
/// (e.g. v4, v4.5, v4.5.14) resolve to the most specific tag, while
/// genuinely conflicting versions (e.g. v4.1.0, v4.2.0) are an error.
///
/// # Arguments
/// * `repo` - Repository to enumerate tags from
/// * `tags_filter` - Optional pattern; tags whose name does not match are ignored
/// * `version_pattern` - Optional pattern whose first capture group extracts
///   the version string from a tag name; non-matching tags use their name as-is
///
/// Tags whose version string does not parse are silently skipped; many
/// repositories have tags unrelated to releases.
pub fn resolve_release_tags<R: Repository>(
    repo: &R,
    tags_filter: Option<&Regex>,
    version_pattern: Option<&Regex>,
) -> Result<ReleaseMap> {
    let mut commit_tags: HashMap<Oid, Vec<TagCandidate>> = HashMap::new();

    for tag in repo.tags()? {
        if let Some(filter) = tags_filter {
            if !filter.is_match(&tag.name) {
                continue;
            }
        }

        let version_str = version_pattern
            .and_then(|pattern| pattern.captures(&tag.name))
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .unwrap_or(&tag.name);

        let version = match parse_version(version_str) {
            Some(version) => version,
            None => continue,
        };

        commit_tags
            .entry(tag.target)
            .or_default()
            .push(TagCandidate {
                original_name: tag.name,
                version,
            });
    }

    let mut releases = ReleaseMap::new();

    for (commit, candidates) in commit_tags {
        if candidates.len() > 1 {
            let pivot = &candidates[0].version;
            let conflicting = candidates[1..]
                .iter()
                .any(|candidate| !are_compatible_granularities(pivot, &candidate.version));

            if conflicting {
                return Err(NextVersionError::conflicting_tags(commit.to_string()));
            }
        }

        releases.insert(commit, select_most_specific(&candidates));
    }

    Ok(releases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::{oid, MockRepository};

    fn candidate(name: &str) -> TagCandidate {
        TagCandidate {
            original_name: name.to_string(),
            version: parse_version(name).unwrap(),
        }
    }

    #[test]
    fn test_compatible_equal_versions() {
        let left = Version::new(1, 2, 3);
        let right = Version::new(1, 2, 3);
        assert!(are_compatible_granularities(&left, &right));
    }

    #[test]
    fn test_compatible_major_only() {
        assert!(are_compatible_granularities(
            &Version::new(4, 0, 0),
            &Version::new(4, 5, 14)
        ));
        assert!(are_compatible_granularities(
            &Version::new(4, 5, 14),
            &Version::new(4, 0, 0)
        ));
    }

    #[test]
    fn test_compatible_major_minor() {
        assert!(are_compatible_granularities(
            &Version::new(4, 5, 0),
            &Version::new(4, 5, 14)
        ));
    }

    #[test]
    fn test_incompatible_different_major() {
        assert!(!are_compatible_granularities(
            &Version::new(3, 1, 0),
            &Version::new(4, 1, 0)
        ));
    }

    #[test]
    fn test_incompatible_full_versions() {
        assert!(!are_compatible_granularities(
            &Version::new(4, 1, 0),
            &Version::new(4, 2, 0)
        ));
        assert!(!are_compatible_granularities(
            &Version::new(4, 1, 1),
            &Version::new(4, 1, 2)
        ));
    }

    #[test]
    fn test_select_most_specific() {
        let candidates = vec![candidate("v4"), candidate("v4.5.14"), candidate("v4.5")];
        assert_eq!(select_most_specific(&candidates), Version::new(4, 5, 14));
    }

    #[test]
    fn test_select_most_specific_tie_keeps_input_order() {
        let candidates = vec![candidate("1.2.3"), candidate("v1.2.3")];
        assert_eq!(select_most_specific(&candidates), Version::new(1, 2, 3));
    }

    #[test]
    fn test_resolve_single_tag() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_tag("v1.0.0", oid(1));

        let releases = resolve_release_tags(&repo, None, None).unwrap();
        assert_eq!(releases.get(&oid(1)), Some(&Version::new(1, 0, 0)));
    }

    #[test]
    fn test_resolve_granularity_variants_pick_most_specific() {
        for names in [
            ["v4", "v4.5", "v4.5.14"],
            ["v4.5.14", "v4", "v4.5"],
            ["v4.5", "v4.5.14", "v4"],
        ] {
            let mut repo = MockRepository::new();
            repo.add_commit(oid(1), "feat: x", &[]);
            for name in names {
                repo.add_tag(name, oid(1));
            }

            let releases = resolve_release_tags(&repo, None, None).unwrap();
            assert_eq!(releases.get(&oid(1)), Some(&Version::new(4, 5, 14)));
        }
    }

    #[test]
    fn test_resolve_conflicting_tags_fails() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_tag("v4.1.0", oid(1));
        repo.add_tag("v4.2.0", oid(1));

        let err = resolve_release_tags(&repo, None, None).unwrap_err();
        match err {
            NextVersionError::ConflictingTags(commit) => {
                assert_eq!(commit, oid(1).to_string());
            }
            other => panic!("expected ConflictingTags, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_equal_versions_no_conflict() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_tag("1.2.3", oid(1));
        repo.add_tag("v1.2.3", oid(1));

        let releases = resolve_release_tags(&repo, None, None).unwrap();
        assert_eq!(releases.get(&oid(1)), Some(&Version::new(1, 2, 3)));
    }

    #[test]
    fn test_resolve_skips_unparseable_tags() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_tag("latest", oid(1));
        repo.add_tag("v2.0.0", oid(1));

        let releases = resolve_release_tags(&repo, None, None).unwrap();
        assert_eq!(releases.get(&oid(1)), Some(&Version::new(2, 0, 0)));
    }

    #[test]
    fn test_resolve_no_tags_is_empty_map() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);

        let releases = resolve_release_tags(&repo, None, None).unwrap();
        assert!(releases.is_empty());
    }

    #[test]
    fn test_resolve_with_tags_filter() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_commit(oid(2), "feat: y", &[]);
        repo.add_tag("app-v1.0.0", oid(1));
        repo.add_tag("v9.9.9", oid(2));

        let filter = Regex::new("^app-").unwrap();
        let pattern = Regex::new(r"^app-(.*)$").unwrap();
        let releases = resolve_release_tags(&repo, Some(&filter), Some(&pattern)).unwrap();

        assert_eq!(releases.get(&oid(1)), Some(&Version::new(1, 0, 0)));
        assert_eq!(releases.get(&oid(2)), None);
    }

    #[test]
    fn test_resolve_version_pattern_non_matching_uses_name() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "feat: x", &[]);
        repo.add_tag("v3.2.1", oid(1));

        let pattern = Regex::new(r"^release-(.*)$").unwrap();
        let releases = resolve_release_tags(&repo, None, Some(&pattern)).unwrap();
        assert_eq!(releases.get(&oid(1)), Some(&Version::new(3, 2, 1)));
    }
}
