use semver::Version;

/// Parse a version from a tag string, accepting the forms release tags
/// actually take: an optional leading 'v' or 'V' and partial versions
/// ("4" -> 4.0.0, "4.5" -> 4.5.0). Pre-release and build metadata on a
/// partial version are kept ("4.5-rc.1" -> 4.5.0-rc.1).
///
/// Returns `None` for anything that is not a version; many repositories
/// carry tags unrelated to releases and those are simply not ours.
pub fn parse_version(input: &str) -> Option<Version> {
    let cleaned = input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input);

    if let Ok(version) = Version::parse(cleaned) {
        return Some(version);
    }

    // Pad partial versions before any pre-release/build suffix
    let (core, suffix) = match cleaned.find(['-', '+']) {
        Some(idx) => cleaned.split_at(idx),
        None => (cleaned, ""),
    };

    let padded = match core.matches('.').count() {
        0 => format!("{}.0.0{}", core, suffix),
        1 => format!("{}.0{}", core, suffix),
        _ => return None,
    };

    Version::parse(&padded).ok()
}

/// Number of '.' separators in a tag name after stripping one optional
/// leading literal "v". "v4" -> 0, "v4.5" -> 1, "4.5.14" -> 2.
pub fn tag_specificity(tag_name: &str) -> usize {
    let clean = tag_name.strip_prefix('v').unwrap_or(tag_name);
    clean.matches('.').count()
}

/// Validate a version prefix for output formatting (e.g. "v" in "v1.2.3").
/// Empty is valid; otherwise only characters that are safe in a tag name.
pub fn is_valid_version_prefix(prefix: &str) -> bool {
    prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        assert_eq!(parse_version("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_with_v_prefix() {
        assert_eq!(parse_version("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(parse_version("V1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_major_only() {
        assert_eq!(parse_version("v4"), Some(Version::new(4, 0, 0)));
        assert_eq!(parse_version("4"), Some(Version::new(4, 0, 0)));
    }

    #[test]
    fn test_parse_major_minor() {
        assert_eq!(parse_version("v4.5"), Some(Version::new(4, 5, 0)));
    }

    #[test]
    fn test_parse_partial_with_prerelease() {
        let parsed = parse_version("4.5-rc.1").unwrap();
        assert_eq!((parsed.major, parsed.minor, parsed.patch), (4, 5, 0));
        assert_eq!(parsed.pre.as_str(), "rc.1");
    }

    #[test]
    fn test_parse_full_with_prerelease_and_build() {
        let parsed = parse_version("v1.0.0-alpha+001").unwrap();
        assert_eq!(parsed.pre.as_str(), "alpha");
        assert_eq!(parsed.build.as_str(), "001");
    }

    #[test]
    fn test_parse_rejects_non_versions() {
        assert_eq!(parse_version("release"), None);
        assert_eq!(parse_version("latest"), None);
        assert_eq!(parse_version("1.2.3.4"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn test_equality_ignores_textual_prefix() {
        assert_eq!(parse_version("v1.2.3"), parse_version("1.2.3"));
    }

    #[test]
    fn test_tag_specificity() {
        assert_eq!(tag_specificity("v4"), 0);
        assert_eq!(tag_specificity("v4.5"), 1);
        assert_eq!(tag_specificity("v4.5.14"), 2);
        assert_eq!(tag_specificity("4.5.14"), 2);
    }

    #[test]
    fn test_valid_version_prefixes() {
        assert!(is_valid_version_prefix(""));
        assert!(is_valid_version_prefix("v"));
        assert!(is_valid_version_prefix("release-"));
        assert!(!is_valid_version_prefix("v "));
        assert!(!is_valid_version_prefix("v@"));
    }
}
