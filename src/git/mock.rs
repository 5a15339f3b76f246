use crate::domain::PathFilter;
use crate::error::{NextVersionError, Result};
use crate::git::{CommitInfo, Repository, TagRef};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Commits are held newest-first, the order a time-descending walk from
/// head would yield them.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    touched_paths: HashMap<Oid, Vec<String>>,
    tags: Vec<TagRef>,
    head: Option<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            touched_paths: HashMap::new(),
            tags: Vec::new(),
            head: None,
        }
    }

    /// Append a commit (newest-first order) and record the paths it touched.
    /// The first commit added becomes head.
    pub fn add_commit(&mut self, oid: Oid, message: impl Into<String>, paths: &[&str]) {
        if self.head.is_none() {
            self.head = Some(oid);
        }
        self.commits.push(CommitInfo {
            id: oid,
            message: message.into(),
        });
        self.touched_paths
            .insert(oid, paths.iter().map(|p| p.to_string()).collect());
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push(TagRef {
            name: name.into(),
            target: oid,
        });
    }

}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.head.ok_or(NextVersionError::NoCommitsFound)
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn walk_commits<'a>(
        &'a self,
        from: Oid,
        path_filter: Option<&'a PathFilter>,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>> {
        let start = self
            .commits
            .iter()
            .position(|c| c.id == from)
            .unwrap_or(self.commits.len());

        let walk = self.commits[start..]
            .iter()
            .filter(move |commit| match path_filter {
                Some(filter) => self
                    .touched_paths
                    .get(&commit.id)
                    .map(|paths| paths.iter().any(|p| filter.matches(p)))
                    .unwrap_or(false),
                None => true,
            })
            .map(|commit| Ok(commit.clone()));

        Ok(Box::new(walk))
    }
}

/// Build a deterministic OID for tests (e.g. `oid(1)`)
pub fn oid(byte: u8) -> Oid {
    Oid::from_bytes(&[byte; 20]).unwrap()
}
