use crate::domain::Severity;
use semver::Version;

/// Compute the version that should follow `previous` given the severities
/// of the commits since it.
///
/// The highest severity decides: a breaking change bumps major, a feature
/// bumps minor, a fix bumps patch. Chore-only histories (and empty ones)
/// produce no release: the previous version comes back with `false`.
///
/// A patch bump on a version carrying a pre-release drops the pre-release
/// without incrementing patch (1.2.3-beta.1 + fix -> 1.2.3); major and
/// minor bumps reset lower components and clear pre-release/build.
pub fn calculate_next_version(previous: &Version, severities: &[Severity]) -> (Version, bool) {
    let highest = severities.iter().max().copied().unwrap_or(Severity::Chore);

    let next = match highest {
        Severity::Chore => return (previous.clone(), false),
        Severity::Fix => {
            if previous.pre.is_empty() {
                Version::new(previous.major, previous.minor, previous.patch + 1)
            } else {
                Version::new(previous.major, previous.minor, previous.patch)
            }
        }
        Severity::Feature => Version::new(previous.major, previous.minor + 1, 0),
        Severity::BreakingChange => Version::new(previous.major + 1, 0, 0),
    };

    (next, true)
}
