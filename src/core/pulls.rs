use std::cell::OnceCell;

use crate::core::api::GithubClient;
use crate::utils::error::Result;

/// Answers "does this branch have an open pull request" without
/// re-fetching the listing for every candidate.
///
/// The paginated listing is fetched once, on first use, and held for
/// the rest of the run. When the check is disabled no request is ever
/// made and every branch counts as PR-free.
pub struct OpenPrLookup<'a> {
    api: &'a GithubClient,
    enabled: bool,
    branches: OnceCell<Vec<String>>,
}

impl<'a> OpenPrLookup<'a> {
    pub fn new(api: &'a GithubClient, enabled: bool) -> Self {
        Self {
            api,
            enabled,
            branches: OnceCell::new(),
        }
    }

    pub fn has_open_pull_request(&self, branch: &str) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }

        Ok(self.branches()?.iter().any(|open| open == branch))
    }

    fn branches(&self) -> Result<&Vec<String>> {
        if let Some(branches) = self.branches.get() {
            return Ok(branches);
        }

        let fetched = self.api.list_open_pull_request_branches()?;
        Ok(self.branches.get_or_init(|| fetched))
    }
}
