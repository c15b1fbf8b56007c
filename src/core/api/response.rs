use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::utils::error::{Result, SweepError};

/// The normalized result of one API call.
///
/// Non-2xx statuses returned by the server are ordinary responses here;
/// only transport-level failures surface as errors.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl ApiResponse {
    pub fn new(
        status: u16,
        headers: impl IntoIterator<Item = (String, String)>,
        body: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Decode the body as JSON. On failure the error keeps the body,
    /// headers and status around for diagnostics.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| SweepError::ApiDecode {
            status: self.status,
            body: self.body.clone(),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            source,
        })
    }
}
