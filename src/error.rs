use thiserror::Error;

/// Unified error type for next-version resolution
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("commit {0} was tagged with multiple conflicting semantic versions")]
    ConflictingTags(String),

    #[error("no commits found")]
    NoCommitsFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(msg.into())
    }

    /// Create a tag-conflict error for the given commit
    pub fn conflicting_tags(commit: impl Into<String>) -> Self {
        NextVersionError::ConflictingTags(commit.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        NextVersionError::Output(msg.into())
    }
}
