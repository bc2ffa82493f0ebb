use crate::calendar::Today;
use crate::error::Result;
use crate::git::CommitSource;
use crate::model::{CommitCounts, CommitMeta};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What to do when one repository in the list cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first broken repository.
    #[default]
    FailFast,
    /// Log a warning and carry on with the remaining repositories.
    SkipAndWarn,
}

/// Count `author_email`'s commits per day bucket across `repositories`.
///
/// Repositories are read one after another; the counts are threaded through
/// each step by value.
pub fn aggregate<S>(
    source: &S,
    author_email: &str,
    repositories: &[PathBuf],
    today: &Today,
    policy: FailurePolicy,
) -> Result<CommitCounts>
where
    S: CommitSource + ?Sized,
{
    repositories
        .iter()
        .try_fold(CommitCounts::new(), |counts, path| {
            match matching_buckets(source, author_email, path, today) {
                Ok(buckets) => Ok(fill_commits(counts, buckets)),
                Err(err) if policy == FailurePolicy::SkipAndWarn => {
                    warn!(repository = %path.display(), error = %err, "skipping unreadable repository");
                    Ok(counts)
                }
                Err(err) => Err(err),
            }
        })
}

fn fill_commits(counts: CommitCounts, buckets: Vec<u32>) -> CommitCounts {
    buckets.into_iter().fold(counts, |mut counts, bucket| {
        counts.increment(bucket);
        counts
    })
}

/// Buckets of every commit in `path` authored by `author_email` inside the
/// window. Email comparison is exact and case sensitive.
fn matching_buckets<S>(source: &S, author_email: &str, path: &Path, today: &Today) -> Result<Vec<u32>>
where
    S: CommitSource + ?Sized,
{
    let mut buckets = Vec::new();
    let mut visited = 0usize;

    source.visit(path, &mut |commit: &CommitMeta| {
        visited += 1;
        if commit.author_email != author_email {
            return;
        }
        if let Some(days_ago) = today.days_ago(&commit.timestamp) {
            buckets.push(days_ago);
        }
    })?;

    debug!(
        repository = %path.display(),
        visited,
        matched = buckets.len(),
        "collected commits"
    );
    Ok(buckets)
}
