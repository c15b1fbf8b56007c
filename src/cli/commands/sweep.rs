use crate::cli::parser::Cli;
use crate::config::{BranchPattern, Settings};
use crate::core::api::GithubClient;
use crate::core::git::{GitCli, GitOperations};
use crate::core::pulls::OpenPrLookup;
use crate::core::sweep::Sweeper;
use crate::utils::error::{Result, SweepError};
use crate::utils::outputs;

pub fn execute(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;
    apply_overrides(&mut settings, &cli)?;

    let git = GitCli::in_dir(&settings.workspace);
    let api = GithubClient::new(&settings)?;

    run(&settings, &git, &api)
}

/// The run itself, over the injected collaborators.
pub fn run(settings: &Settings, git: &dyn GitOperations, api: &GithubClient) -> Result<()> {
    outputs::emit("was_dry_run", if settings.dry_run { "true" } else { "false" })?;

    git.configure_workspace(&settings.workspace)?;
    git.fetch_all()?;
    let branches = git.list_remote_branches()?;

    let pull_requests = OpenPrLookup::new(api, settings.exclude_open_pr_branches);
    let sweeper = Sweeper::new(settings, git, api, &pull_requests);
    let report = sweeper.run(&branches)?;

    // Published before the failure check so partially successful runs
    // still report what was removed.
    outputs::emit("deleted_branches", &outputs::format_branch_list(&report.deleted))?;

    if !report.failed.is_empty() {
        return Err(SweepError::BranchesNotDeleted {
            branches: report.failed,
        });
    }

    Ok(())
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) -> Result<()> {
    if cli.dry_run {
        settings.dry_run = true;
    }
    if cli.live {
        settings.dry_run = false;
    }
    if let Some(date) = &cli.date {
        settings.cutoff_date = date.clone();
    }
    if let Some(repository) = &cli.repository {
        settings.repository = repository.clone();
    }
    if let Some(pattern) = &cli.branch_regex {
        settings.include_pattern = BranchPattern::parse(pattern)?;
    }
    Ok(())
}
