use reqwest::blocking::Client;
use reqwest::Method;

use super::response::ApiResponse;
use crate::utils::error::Result;

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Seam between the API client and the wire, so API-backed code can be
/// exercised against canned responses.
pub trait HttpTransport {
    fn execute(&self, method: Method, url: &str, query: &[(&str, String)]) -> Result<ApiResponse>;
}

/// The real transport: one authenticated request per call, no retries,
/// no timeout handling. A non-2xx status is a normal response; only
/// connection-level failures become errors.
pub struct ReqwestTransport {
    client: Client,
    token: String,
}

impl ReqwestTransport {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent("branch-sweep").build()?;
        Ok(Self {
            client,
            token: token.into(),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, method: Method, url: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        let mut request = self
            .client
            .request(method, url)
            .header("Accept", GITHUB_ACCEPT)
            .header("Authorization", format!("Bearer {}", self.token));

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text()?;

        Ok(ApiResponse::new(status, headers, body))
    }
}
