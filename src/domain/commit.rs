use regex::Regex;

/// Footers that mark a commit as breaking regardless of its type
const BREAKING_CHANGE_FOOTERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub is_breaking_change: bool,
}

impl ParsedCommit {
    /// Parse a commit message according to conventional commits spec
    /// Supports formats:
    /// - type(scope)!: description
    /// - type(scope): description
    /// - type!: description
    /// - type: description
    ///
    /// Returns `None` for messages that do not follow the convention;
    /// the caller decides how to treat those.
    pub fn parse(message: &str) -> Option<Self> {
        let has_breaking_footer = BREAKING_CHANGE_FOOTERS
            .iter()
            .any(|footer| message.contains(footer));

        // Try format: type(scope)!: description
        if let Some(captures) = Regex::new(r"^([a-z]+)\(([^)]+)\)(!?):\s*(.*)")
            .ok()
            .and_then(|re| re.captures(message))
        {
            let has_exclamation = captures.get(3).map(|m| m.as_str()) == Some("!");

            return Some(ParsedCommit {
                r#type: captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                scope: captures.get(2).map(|m| m.as_str().to_string()),
                description: captures
                    .get(4)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                is_breaking_change: has_exclamation || has_breaking_footer,
            });
        }

        // Try format: type!: description
        if let Some(captures) = Regex::new(r"^([a-z]+)!:\s*(.*)")
            .ok()
            .and_then(|re| re.captures(message))
        {
            return Some(ParsedCommit {
                r#type: captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                scope: None,
                description: captures
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                is_breaking_change: true,
            });
        }

        // Try format: type: description
        if let Some(captures) = Regex::new(r"^([a-z]+):\s*(.*)")
            .ok()
            .and_then(|re| re.captures(message))
        {
            return Some(ParsedCommit {
                r#type: captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                scope: None,
                description: captures
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                is_breaking_change: has_breaking_footer,
            });
        }

        None
    }
}
