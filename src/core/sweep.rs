use crate::config::Settings;
use crate::core::api::GithubClient;
use crate::core::filter::BranchFilter;
use crate::core::git::GitOperations;
use crate::core::pulls::OpenPrLookup;
use crate::utils::error::Result;

/// Outcome of one run: branches deleted (or slated for deletion in dry
/// run) and branches whose deletion was attempted and failed. A branch
/// lands in at most one of the two.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
}

/// Drives the full branch list through the filter and deletes (or
/// simulates deleting) the survivors.
pub struct Sweeper<'a> {
    settings: &'a Settings,
    api: &'a GithubClient,
    filter: BranchFilter<'a>,
}

impl<'a> Sweeper<'a> {
    pub fn new(
        settings: &'a Settings,
        git: &'a dyn GitOperations,
        api: &'a GithubClient,
        pull_requests: &'a OpenPrLookup<'a>,
    ) -> Self {
        Self {
            settings,
            api,
            filter: BranchFilter::new(settings, git, pull_requests),
        }
    }

    /// Process branches in order. A deletion rejected by the server is
    /// recorded and the run continues; only transport-level failures
    /// abort.
    pub fn run(&self, branches: &[String]) -> Result<SweepReport> {
        let mut report = SweepReport::default();

        for branch in branches {
            if let Some(reason) = self.filter.skip_reason(branch)? {
                println!("{} {}. Skipping", branch, reason);
                continue;
            }

            if self.settings.dry_run {
                println!("DRY RUN: Deleting {}", branch);
                report.deleted.push(branch.clone());
                continue;
            }

            println!("Deleting {}", branch);
            let response = self.api.delete_branch(branch)?;
            if response.status() == 204 {
                report.deleted.push(branch.clone());
            } else {
                eprintln!("Failed to delete {} (status {})", branch, response.status());
                report.failed.push(branch.clone());
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BranchPattern;
    use crate::core::api::ApiResponse;
    use crate::test_utils::{FakeGit, FakeTransport, RecordedCall};
    use reqwest::Method;
    use std::path::PathBuf;

    fn settings(dry_run: bool) -> Settings {
        Settings {
            base_uri: "https://api.github.com".to_string(),
            workspace: PathBuf::from("/workspace/checkout"),
            repository: "acme/widgets".to_string(),
            token: "token123".to_string(),
            cutoff_date: "2026-01-01".to_string(),
            dry_run,
            include_pattern: BranchPattern::parse("feature/.*").expect("Failed to parse pattern"),
            excluded_branches: vec![
                "main".to_string(),
                "master".to_string(),
                "develop".to_string(),
            ],
            exclude_pattern: BranchPattern::unconfigured(),
            exclude_open_pr_branches: true,
        }
    }

    fn branch_list(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn is_pulls_call(call: &RecordedCall) -> bool {
        call.url.ends_with("/pulls")
    }

    #[test]
    fn test_dry_run_reports_candidates_without_delete_calls() {
        let settings = settings(true);
        let git = FakeGit {
            recently_active: vec!["feature/y".to_string()],
            ..Default::default()
        };
        let fake = FakeTransport::new(|call: &RecordedCall| {
            assert!(is_pulls_call(call), "unexpected call to {}", call.url);
            ApiResponse::new(200, vec![], "[]")
        });
        let api = GithubClient::with_transport(
            &settings.base_uri,
            &settings.repository,
            Box::new(fake.clone()),
        );
        let pull_requests = OpenPrLookup::new(&api, settings.exclude_open_pr_branches);
        let sweeper = Sweeper::new(&settings, &git, &api, &pull_requests);

        let report = sweeper
            .run(&branch_list(&["main", "feature/x", "feature/y", "hotfix/z"]))
            .expect("Failed to run sweep");

        assert_eq!(report.deleted, vec!["feature/x"]);
        assert!(report.failed.is_empty());
        assert!(fake.calls().iter().all(|call| call.method == Method::GET));
    }

    #[test]
    fn test_live_run_deletes_through_the_api() {
        let settings = settings(false);
        let git = FakeGit::default();
        let fake = FakeTransport::new(|call: &RecordedCall| {
            if is_pulls_call(call) {
                ApiResponse::new(200, vec![], "[]")
            } else {
                ApiResponse::new(204, vec![], "")
            }
        });
        let api = GithubClient::with_transport(
            &settings.base_uri,
            &settings.repository,
            Box::new(fake.clone()),
        );
        let pull_requests = OpenPrLookup::new(&api, settings.exclude_open_pr_branches);
        let sweeper = Sweeper::new(&settings, &git, &api, &pull_requests);

        let report = sweeper
            .run(&branch_list(&["feature/x", "feature/y"]))
            .expect("Failed to run sweep");

        assert_eq!(report.deleted, vec!["feature/x", "feature/y"]);
        assert!(report.failed.is_empty());

        let deletes: Vec<_> = fake
            .calls()
            .into_iter()
            .filter(|call| call.method == Method::DELETE)
            .collect();
        assert_eq!(deletes.len(), 2);
        assert_eq!(
            deletes[0].url,
            "https://api.github.com/repos/acme/widgets/git/refs/heads/feature/x"
        );
    }

    #[test]
    fn test_rejected_deletion_is_recorded_and_the_run_continues() {
        let settings = settings(false);
        let git = FakeGit::default();
        let fake = FakeTransport::new(|call: &RecordedCall| {
            if is_pulls_call(call) {
                ApiResponse::new(200, vec![], "[]")
            } else if call.url.ends_with("feature/b") {
                ApiResponse::new(422, vec![], r#"{"message": "Reference does not exist"}"#)
            } else {
                ApiResponse::new(204, vec![], "")
            }
        });
        let api = GithubClient::with_transport(
            &settings.base_uri,
            &settings.repository,
            Box::new(fake.clone()),
        );
        let pull_requests = OpenPrLookup::new(&api, settings.exclude_open_pr_branches);
        let sweeper = Sweeper::new(&settings, &git, &api, &pull_requests);

        let report = sweeper
            .run(&branch_list(&["feature/a", "feature/b", "feature/c"]))
            .expect("Failed to run sweep");

        assert_eq!(report.deleted, vec!["feature/a", "feature/c"]);
        assert_eq!(report.failed, vec!["feature/b"]);

        let deletes = fake
            .calls()
            .into_iter()
            .filter(|call| call.method == Method::DELETE)
            .count();
        assert_eq!(deletes, 3);
    }

    #[test]
    fn test_pull_listing_is_fetched_once_for_the_whole_run() {
        let settings = settings(true);
        let git = FakeGit::default();
        let fake = FakeTransport::new(|_call: &RecordedCall| {
            ApiResponse::new(200, vec![], r#"[{"head": {"ref": "feature/pr"}}]"#)
        });
        let api = GithubClient::with_transport(
            &settings.base_uri,
            &settings.repository,
            Box::new(fake.clone()),
        );
        let pull_requests = OpenPrLookup::new(&api, settings.exclude_open_pr_branches);
        let sweeper = Sweeper::new(&settings, &git, &api, &pull_requests);

        let report = sweeper
            .run(&branch_list(&["feature/a", "feature/b", "feature/pr"]))
            .expect("Failed to run sweep");

        assert_eq!(report.deleted, vec!["feature/a", "feature/b"]);
        assert_eq!(fake.calls().len(), 1);
    }
}
