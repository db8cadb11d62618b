// src/source/config.rs
use std::time::Duration;

/// Browser-like identity; some documentation hosts block unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/120.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_ATTEMPTS: u32 = 3;
pub const BASE_RETRY_DELAY: Duration = Duration::from_millis(1500);

/// Fixed settings for fetching a remote source.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            max_attempts: MAX_ATTEMPTS,
            base_delay: BASE_RETRY_DELAY,
        }
    }
}

impl FetchConfig {
    /// Linear backoff: the wait after the n-th failed attempt is `base_delay * n`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}
