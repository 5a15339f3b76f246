use crate::domain::commit::ParsedCommit;

/// Severity of a single commit, ordered by the size of the version bump
/// it calls for: Chore < Fix < Feature < BreakingChange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Chore,
    Fix,
    Feature,
    BreakingChange,
}

fn default_chore_prefixes() -> Vec<String> {
    ["build", "chore", "ci", "docs", "style", "refactor", "perf", "test"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fix_prefixes() -> Vec<String> {
    vec!["fix".to_string()]
}

fn default_feature_prefixes() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Maps conventional commit messages to a [Severity] using configurable
/// type prefix tables. A custom table replaces the default wholesale.
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    chore_prefixes: Vec<String>,
    fix_prefixes: Vec<String>,
    feature_prefixes: Vec<String>,
}

impl CommitClassifier {
    /// Create a classifier with the default prefix tables
    pub fn new() -> Self {
        Self::with_prefixes(None, None, None)
    }

    /// Create a classifier with custom prefix tables; `None` keeps the default
    pub fn with_prefixes(
        chore: Option<Vec<String>>,
        fix: Option<Vec<String>>,
        feature: Option<Vec<String>>,
    ) -> Self {
        CommitClassifier {
            chore_prefixes: chore.unwrap_or_else(default_chore_prefixes),
            fix_prefixes: fix.unwrap_or_else(default_fix_prefixes),
            feature_prefixes: feature.unwrap_or_else(default_feature_prefixes),
        }
    }

    /// Classify a commit message.
    ///
    /// Returns `None` when the message is not a conventional commit or its
    /// type appears in no table. A breaking-change marker ('!' or a
    /// BREAKING CHANGE footer) wins regardless of the type.
    pub fn classify(&self, message: &str) -> Option<Severity> {
        let parsed = ParsedCommit::parse(message)?;

        if parsed.is_breaking_change {
            return Some(Severity::BreakingChange);
        }

        if self.feature_prefixes.contains(&parsed.r#type) {
            Some(Severity::Feature)
        } else if self.fix_prefixes.contains(&parsed.r#type) {
            Some(Severity::Fix)
        } else if self.chore_prefixes.contains(&parsed.r#type) {
            Some(Severity::Chore)
        } else {
            None
        }
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        Self::new()
    }
}
