pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{BranchPattern, Settings};
pub use crate::core::api::GithubClient;
pub use crate::core::git::{GitCli, GitOperations};
pub use crate::core::sweep::{SweepReport, Sweeper};
pub use utils::{Result, SweepError};
