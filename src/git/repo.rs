use crate::error::{GchartError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, Utc};
use gix::{discover, ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily walks every commit reachable from HEAD, each exactly once.
    ///
    /// Commits come out in traversal order, which is neither chronological
    /// nor limited to any date range.
    pub fn commits(&self) -> Result<CommitWalk<'_>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        Ok(CommitWalk {
            repo: &self.repo,
            seen: HashSet::new(),
            stack: VecDeque::from([head_commit.id]),
        })
    }
}

pub struct CommitWalk<'repo> {
    repo: &'repo Repository,
    seen: HashSet<ObjectId>,
    stack: VecDeque<ObjectId>,
}

impl CommitWalk<'_> {
    fn read(&mut self, commit_id: ObjectId) -> Result<CommitRecord> {
        let repo = self.repo;
        let commit = repo.find_commit(commit_id)?;

        let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
        for pid in parents {
            self.stack.push_back(pid);
        }

        let author = commit.author()?;
        let secs = author
            .time()
            .map_err(|e| GchartError::InvalidTimestamp(format!("author time of {commit_id}: {e}")))?
            .seconds;
        let timestamp: DateTime<Utc> = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| GchartError::InvalidTimestamp(format!("{secs} on {commit_id}")))?;

        Ok(CommitRecord {
            id: commit_id.to_string(),
            author_name: author.name.to_string(),
            timestamp,
        })
    }
}

impl Iterator for CommitWalk<'_> {
    type Item = Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit_id) = self.stack.pop_back() {
            if !self.seen.insert(commit_id) {
                continue;
            }
            return Some(self.read(commit_id));
        }
        None
    }
}
