use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotError>;

#[derive(Error, Debug)]
pub enum HotError {
    #[error("Git discover error: {0}")]
    Git(#[from] Box<gix::discover::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("git log failed with {status}")]
    SourceFailure { status: ExitStatus },
    #[error("Malformed commit record line {line:?} in record:\n{record}")]
    MalformedRecord { line: String, record: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<gix::discover::Error> for HotError {
    fn from(err: gix::discover::Error) -> Self {
        HotError::Git(Box::new(err))
    }
}
