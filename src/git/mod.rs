mod repo;

pub use repo::{GitRepo, History};

use crate::error::Result;
use crate::model::CommitMeta;
use std::path::Path;

/// Where commit history comes from. The aggregator only ever sees this seam,
/// so tests can feed it canned commits.
pub trait CommitSource {
    /// Open the repository at `path` and hand every commit reachable from its
    /// head to `visitor`, in history order.
    fn visit(&self, path: &Path, visitor: &mut dyn FnMut(&CommitMeta)) -> Result<()>;
}

/// Reads history from repositories on disk with gix.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSource;

impl CommitSource for GitSource {
    fn visit(&self, path: &Path, visitor: &mut dyn FnMut(&CommitMeta)) -> Result<()> {
        GitRepo::open(path)?.for_each_commit(visitor)
    }
}
