use regex::Regex;
use reqwest::Method;
use serde::Deserialize;

pub mod response;
pub mod transport;

pub use response::ApiResponse;
pub use transport::{HttpTransport, ReqwestTransport};

use crate::config::Settings;
use crate::utils::error::Result;

/// REST client scoped to one repository.
pub struct GithubClient {
    base_uri: String,
    repository: String,
    transport: Box<dyn HttpTransport>,
}

impl GithubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let transport = ReqwestTransport::new(&settings.token)?;
        Ok(Self::with_transport(
            &settings.base_uri,
            &settings.repository,
            Box::new(transport),
        ))
    }

    /// Build a client over any transport; tests inject fakes here.
    pub fn with_transport(
        base_uri: &str,
        repository: &str,
        transport: Box<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            transport,
        }
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}{}", self.base_uri, self.repository, path)
    }

    /// Head-branch names of every open pull request, across all pages.
    pub fn list_open_pull_request_branches(&self) -> Result<Vec<String>> {
        let url = self.repo_url("/pulls");
        let mut branches = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response =
                self.transport
                    .execute(Method::GET, &url, &[("page", page.to_string())])?;
            let pulls: Vec<PullRequest> = response.json()?;
            branches.extend(pulls.into_iter().map(|pull| pull.head.branch));

            match next_page(&response) {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(branches)
    }

    /// Delete the branch's ref. Interpreting the status is left to the
    /// caller; only transport failures error here.
    pub fn delete_branch(&self, branch: &str) -> Result<ApiResponse> {
        let url = self.repo_url(&format!("/git/refs/heads/{}", branch));
        self.transport.execute(Method::DELETE, &url, &[])
    }
}

#[derive(Deserialize)]
struct PullRequest {
    head: PullRequestHead,
}

#[derive(Deserialize)]
struct PullRequestHead {
    #[serde(rename = "ref")]
    branch: String,
}

/// Page number of the `rel="next"` entry in the Link header, if any.
fn next_page(response: &ApiResponse) -> Option<u32> {
    let link_header = response.header("link")?;
    let page_re = Regex::new(r"[?&]page=(\d+)").unwrap();

    for link in link_header.split(',') {
        if link.contains("rel=\"next\"") {
            if let Some(captures) = page_re.captures(link) {
                return captures[1].parse().ok();
            }
        }
    }

    None
}
