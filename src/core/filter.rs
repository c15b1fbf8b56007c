use std::fmt;

use crate::config::Settings;
use crate::core::git::GitOperations;
use crate::core::pulls::OpenPrLookup;
use crate::utils::error::Result;

/// Why a branch was spared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotIncluded,
    Excluded,
    RecentlyActive,
    Protected,
    OpenPullRequest,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotIncluded => "is not included",
            SkipReason::Excluded => "is an excluded branch",
            SkipReason::RecentlyActive => "has been updated recently",
            SkipReason::Protected => "is explicitly protected",
            SkipReason::OpenPullRequest => "has an open pull request",
        };
        write!(f, "{}", text)
    }
}

/// The exclusion rules, evaluated in order. The first matching rule is
/// the one reported; a branch is a deletion candidate only when none
/// apply.
pub struct BranchFilter<'a> {
    settings: &'a Settings,
    git: &'a dyn GitOperations,
    pull_requests: &'a OpenPrLookup<'a>,
}

impl<'a> BranchFilter<'a> {
    pub fn new(
        settings: &'a Settings,
        git: &'a dyn GitOperations,
        pull_requests: &'a OpenPrLookup<'a>,
    ) -> Self {
        Self {
            settings,
            git,
            pull_requests,
        }
    }

    pub fn skip_reason(&self, branch: &str) -> Result<Option<SkipReason>> {
        if !self.settings.include_pattern.is_match(branch) {
            return Ok(Some(SkipReason::NotIncluded));
        }

        if self
            .settings
            .excluded_branches
            .iter()
            .any(|name| name == branch)
        {
            return Ok(Some(SkipReason::Excluded));
        }

        if self
            .git
            .has_commit_since(branch, &self.settings.cutoff_date)?
        {
            return Ok(Some(SkipReason::RecentlyActive));
        }

        if self.settings.exclude_pattern.is_match(branch) {
            return Ok(Some(SkipReason::Protected));
        }

        if self.pull_requests.has_open_pull_request(branch)? {
            return Ok(Some(SkipReason::OpenPullRequest));
        }

        Ok(None)
    }
}
