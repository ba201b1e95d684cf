pub mod cli;
pub mod error;
pub mod git;
pub mod hotness;
pub mod model;

pub use error::{HotError, Result};
pub use git::{GitLog, GitRepo, HistorySource, StaticHistory};
pub use hotness::calculate_hotness;
pub use model::{HotEntry, HotnessMap, LogScope};
