pub mod log;
pub mod repo;

pub use log::{GitLog, HistorySource, StaticHistory};
pub use repo::GitRepo;
