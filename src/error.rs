use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatError>;

#[derive(Error, Debug)]
pub enum HeatError {
    #[error("Git open error: {0}")]
    Open(#[from] Box<gix::open::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Cannot scan directory tree: {0}")]
    Scan(#[source] ignore::Error),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Repository list {}: {source}", .path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for HeatError {
    fn from(err: gix::open::Error) -> Self {
        HeatError::Open(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for HeatError {
    fn from(err: gix::object::commit::Error) -> Self {
        HeatError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for HeatError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        HeatError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for HeatError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        HeatError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for HeatError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        HeatError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for HeatError {
    fn from(err: gix::objs::decode::Error) -> Self {
        HeatError::ObjectDecode(Box::new(err))
    }
}
