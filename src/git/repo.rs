use crate::error::{HeatError, Result};
use crate::model::CommitMeta;
use chrono::DateTime;
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`. Unlike discovery this does not
    /// walk up to parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn head_id(&self) -> Result<ObjectId> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Err(HeatError::GitRepo(format!(
                "{} has no commits yet",
                self.path.display()
            )));
        }
        let commit = head.peel_to_commit_in_place()?;
        Ok(commit.id)
    }

    /// Every commit reachable from `from`, merge parents included, each
    /// visited once.
    pub fn history(&self, from: ObjectId) -> History<'_> {
        History {
            repo: &self.repo,
            seen: HashSet::new(),
            stack: vec![from],
        }
    }

    /// Feed every ancestor of head to `visitor`, with a spinner on stderr.
    pub fn for_each_commit(&self, visitor: &mut dyn FnMut(&CommitMeta)) -> Result<()> {
        let head = self.head_id()?;

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}", self.path.display()));

        let walked: Result<()> = self.history(head).try_for_each(|meta| {
            visitor(&meta?);
            pb.inc(1);
            Ok(())
        });

        pb.finish_and_clear();
        walked
    }
}

pub struct History<'r> {
    repo: &'r Repository,
    seen: HashSet<ObjectId>,
    stack: Vec<ObjectId>,
}

impl History<'_> {
    fn read(&mut self, commit_id: ObjectId) -> Result<CommitMeta> {
        let commit = self.repo.find_commit(commit_id)?;
        let author = commit.author()?;
        let secs = author
            .time()
            .map_err(|e| HeatError::InvalidDate(format!("Unreadable author date: {e}")))?
            .seconds;
        let timestamp = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| HeatError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
        let author_email = author.email.to_string();

        self.stack.extend(commit.parent_ids().map(|id| id.detach()));

        Ok(CommitMeta {
            author_email,
            timestamp,
        })
    }
}

impl Iterator for History<'_> {
    type Item = Result<CommitMeta>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit_id) = self.stack.pop() {
            if !self.seen.insert(commit_id) {
                continue;
            }
            let item = self.read(commit_id);
            if item.is_err() {
                self.stack.clear();
            }
            return Some(item);
        }
        None
    }
}
