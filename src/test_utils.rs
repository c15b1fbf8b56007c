use std::cell::RefCell;
use std::rc::Rc;

use reqwest::Method;

use crate::core::api::{ApiResponse, HttpTransport};
use crate::utils::error::Result;

/// One request as the fake transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

/// Canned-response transport for exercising API-backed code without a
/// network. Clones share the handler and the recorded call log, so a
/// test can hand one clone to the client and inspect the other.
#[derive(Clone)]
pub struct FakeTransport {
    handler: Rc<dyn Fn(&RecordedCall) -> ApiResponse>,
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl FakeTransport {
    pub fn new(handler: impl Fn(&RecordedCall) -> ApiResponse + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl HttpTransport for FakeTransport {
    fn execute(&self, method: Method, url: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        let call = RecordedCall {
            method,
            url: url.to_string(),
            query: query
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        };
        let response = (self.handler)(&call);
        self.calls.borrow_mut().push(call);
        Ok(response)
    }
}

/// A `GitOperations` stand-in driven by a fixed list of recently active
/// branches.
#[derive(Debug, Default)]
pub struct FakeGit {
    pub remote_branches: Vec<String>,
    pub recently_active: Vec<String>,
}

impl crate::core::git::GitOperations for FakeGit {
    fn configure_workspace(&self, _workspace: &std::path::Path) -> Result<()> {
        Ok(())
    }

    fn fetch_all(&self) -> Result<()> {
        Ok(())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        Ok(self.remote_branches.clone())
    }

    fn has_commit_since(&self, branch: &str, _date: &str) -> Result<bool> {
        Ok(self.recently_active.iter().any(|name| name == branch))
    }
}
