use std::path::{Path, PathBuf};
use std::process::Command;

use crate::utils::error::{Result, SweepError};

/// The narrow slice of version-control tooling the sweep relies on.
pub trait GitOperations {
    /// Mark `workspace` as a trusted directory and rewrite SSH remote
    /// URLs to HTTPS so fetching works inside CI containers.
    fn configure_workspace(&self, workspace: &Path) -> Result<()>;

    /// Fetch all remotes with pruning, converting a shallow clone to a
    /// full one when possible.
    fn fetch_all(&self) -> Result<()>;

    /// Names of the remote branches, without the `refs/heads/` prefix.
    fn list_remote_branches(&self) -> Result<Vec<String>>;

    /// Whether `origin/<branch>` has any commit at or after `date`.
    fn has_commit_since(&self, branch: &str, date: &str) -> Result<bool>;
}

/// Runs `git` as a subprocess in the checkout the CI job provides.
#[derive(Debug, Default)]
pub struct GitCli {
    working_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in a specific directory instead of the process cwd.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(path.into()),
        }
    }

    fn git_command(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self
            .git_command()
            .args(args)
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::git_operation(format!(
                "Git command failed ({}): {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().to_string())
    }

    fn run_with_status(&self, args: &[&str]) -> Result<()> {
        let status = self
            .git_command()
            .args(args)
            .status()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !status.success() {
            return Err(SweepError::git_operation(format!(
                "Git command failed: {}",
                args.join(" ")
            )));
        }

        Ok(())
    }
}

impl GitOperations for GitCli {
    fn configure_workspace(&self, workspace: &Path) -> Result<()> {
        let workspace = workspace.to_string_lossy();
        self.run_with_status(&["config", "--global", "--add", "safe.directory", &workspace])?;
        self.run_with_status(&[
            "config",
            "url.https://github.com/.insteadOf",
            "git@github.com:",
        ])
    }

    fn fetch_all(&self) -> Result<()> {
        // CI checkouts are usually shallow; unshallowing a full clone fails.
        if self
            .run_with_status(&["fetch", "--all", "--prune", "--unshallow"])
            .is_err()
        {
            self.run_with_status(&["fetch", "--all", "--prune"])?;
        }
        Ok(())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        let output = self.run(&["ls-remote", "-q", "--heads", "--refs"])?;

        let mut branches = Vec::new();
        for line in output.lines() {
            if let Some((_sha, refname)) = line.split_once('\t') {
                if let Some(name) = refname.strip_prefix("refs/heads/") {
                    branches.push(name.to_string());
                }
            }
        }

        Ok(branches)
    }

    fn has_commit_since(&self, branch: &str, date: &str) -> Result<bool> {
        let since = format!("--since={}", date);
        let remote_ref = format!("origin/{}", branch);
        let output = self.run(&["log", "--oneline", "-1", &since, &remote_ref])?;
        Ok(!output.is_empty())
    }
}
