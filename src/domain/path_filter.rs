use crate::error::Result;
use regex::Regex;

/// Path predicate built from a textual pattern. A leading '!' inverts the
/// sense: matching paths are excluded rather than included.
#[derive(Debug, Clone)]
pub struct PathFilter {
    regex: Regex,
    exclude: bool,
}

impl PathFilter {
    /// Compile a filter from a pattern string
    pub fn parse(pattern: &str) -> Result<Self> {
        let (pattern, exclude) = match pattern.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (pattern, false),
        };

        Ok(PathFilter {
            regex: Regex::new(pattern)?,
            exclude,
        })
    }

    /// Whether a path passes the filter
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path) != self.exclude
    }
}
