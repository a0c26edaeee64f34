use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// HTTP settings for page fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchOptions {
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    pub user_agent: String,
    pub redirect_limit: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            redirect_limit: 10,
        }
    }
}
