use regex::Regex;

use crate::utils::error::{Result, SweepError};

/// A branch-name pattern that may be left unconfigured.
///
/// A configured pattern must match the whole branch name: `feature/.*`
/// matches `feature/x` but not `old/feature/x`. An unconfigured pattern
/// matches nothing, so leaving the inclusion pattern empty means no
/// branch is ever eligible for deletion, and leaving the exclusion
/// pattern empty protects nothing.
#[derive(Debug, Clone)]
pub struct BranchPattern(Option<Regex>);

impl BranchPattern {
    /// Parse a pattern from its configured source; an empty string is
    /// the unconfigured state.
    pub fn parse(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Ok(Self::unconfigured());
        }

        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            SweepError::config_error(format!("invalid branch pattern '{}': {}", source, e))
        })?;

        Ok(Self(Some(regex)))
    }

    pub fn unconfigured() -> Self {
        Self(None)
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_match(&self, branch: &str) -> bool {
        match &self.0 {
            Some(regex) => regex.is_match(branch),
            None => false,
        }
    }
}
