use crate::domain::PathFilter;
use crate::error::{NextVersionError, Result};
use crate::git::{CommitInfo, TagRef};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Whether `commit` changed at least one path accepted by `filter`.
    ///
    /// Diffs against the first parent; root commits diff against the empty
    /// tree.
    fn commit_touches_path(&self, commit: &git2::Commit, filter: &PathFilter) -> Result<bool> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        for delta in diff.deltas() {
            for file in [delta.new_file(), delta.old_file()] {
                if let Some(path) = file.path().and_then(|p| p.to_str()) {
                    if filter.matches(path) {
                        return Ok(true);
                    }
                }
            }
        }

        Ok(false)
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        match self.repo.head() {
            Ok(head) => head
                .target()
                .ok_or_else(|| NextVersionError::config("HEAD is not a direct reference")),
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Err(NextVersionError::NoCommitsFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;

            let name = match reference.shorthand() {
                Some(name) => name.to_string(),
                None => continue,
            };

            // Peels annotated tag objects through to the commit
            let commit = reference.peel_to_commit()?;

            tags.push(TagRef {
                name,
                target: commit.id(),
            });
        }

        Ok(tags)
    }

    fn walk_commits<'a>(
        &'a self,
        from: Oid,
        path_filter: Option<&'a PathFilter>,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(from)?;

        let walk = revwalk.map(move |oid_result| -> Result<Option<CommitInfo>> {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            if let Some(filter) = path_filter {
                if !self.commit_touches_path(&commit, filter)? {
                    return Ok(None);
                }
            }

            let message = commit.message().unwrap_or("").to_string();

            Ok(Some(CommitInfo { id: oid, message }))
        });

        // Skipped commits vanish; errors stay in-stream
        Ok(Box::new(walk.filter_map(|item| item.transpose())))
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// All operations used here are reads; libgit2 is thread-safe for reads.
unsafe impl Sync for Git2Repository {}
