use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API response is not valid JSON (status {status}): {body}")]
    ApiDecode {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
        #[source]
        source: serde_json::Error,
    },

    #[error("a few branches were not deleted [{}]", .branches.join(","))]
    BranchesNotDeleted { branches: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
