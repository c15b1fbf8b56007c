use std::env;
use std::path::PathBuf;

pub mod pattern;

pub use pattern::BranchPattern;

use crate::utils::error::{Result, SweepError};

pub const DEFAULT_EXCLUDED_BRANCHES: &str = "main,master,develop";

/// Process-wide configuration, resolved once at startup and passed by
/// reference into every component that needs it.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the hosting service's REST API, e.g. `https://api.github.com`.
    pub base_uri: String,
    /// Local checkout directory, marked as trusted before any git call.
    pub workspace: PathBuf,
    /// Repository identifier in `owner/name` form.
    pub repository: String,
    /// Bearer credential for API calls.
    pub token: String,
    /// Passed verbatim to the recent-activity check (`git log --since`).
    pub cutoff_date: String,
    pub dry_run: bool,
    /// Branch names must fully match this to be eligible for deletion.
    pub include_pattern: BranchPattern,
    /// Exact branch names that are never deleted.
    pub excluded_branches: Vec<String>,
    /// Branch names fully matching this are never deleted.
    pub exclude_pattern: BranchPattern,
    /// Whether branches with an open pull request are protected.
    pub exclude_open_pr_branches: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve settings through `lookup` so tests never have to mutate
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String> {
            lookup(name).ok_or_else(|| SweepError::config_error(format!("{} is not set", name)))
        };

        let excluded_branches = lookup("INPUT_EXCLUDED_BRANCHES")
            .unwrap_or_else(|| DEFAULT_EXCLUDED_BRANCHES.to_string());

        Ok(Self {
            base_uri: required("GITHUB_API_URL")?,
            workspace: PathBuf::from(required("GITHUB_WORKSPACE")?),
            repository: required("GITHUB_REPOSITORY")?,
            token: required("INPUT_REPO_TOKEN")?,
            cutoff_date: required("INPUT_DATE")?,
            dry_run: parse_flag(lookup("INPUT_DRY_RUN"), true),
            include_pattern: BranchPattern::parse(
                &lookup("INPUT_BRANCH_REGEX").unwrap_or_default(),
            )?,
            excluded_branches: split_branch_list(&excluded_branches),
            exclude_pattern: BranchPattern::parse(
                &lookup("INPUT_EXCLUDED_BRANCH_REGEX").unwrap_or_default(),
            )?,
            exclude_open_pr_branches: parse_flag(lookup("INPUT_EXCLUDE_OPEN_PR_BRANCHES"), true),
        })
    }
}

// Only the literal string "true" enables a flag.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(value) => value == "true",
        None => default,
    }
}

fn split_branch_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.to_string()).collect()
}
