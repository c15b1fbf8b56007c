use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "branch-sweep")]
#[command(about = "Deletes stale remote branches through the GitHub REST API")]
#[command(
    version,
    long_about = "Reads its configuration from the CI environment (GITHUB_* and INPUT_* \
variables); flags override individual values for local runs"
)]
pub struct Cli {
    /// Report what would be deleted without touching the API
    #[arg(long, conflicts_with = "live")]
    pub dry_run: bool,

    /// Perform deletions even when INPUT_DRY_RUN requests a dry run
    #[arg(long)]
    pub live: bool,

    /// Cutoff date override (passed verbatim to git log --since)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Repository override in owner/name form
    #[arg(long, value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// Inclusion pattern override (branch names must fully match)
    #[arg(long, value_name = "REGEX")]
    pub branch_regex: Option<String>,
}
