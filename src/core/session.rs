//! Shared Honeybadger session.
//!
//! A [`Session`] owns the one long-lived HTTP client used for every upstream
//! request, together with the immutable project id and API key. It is created
//! once at process start and shared read-only (behind `Arc`) across
//! concurrent tool invocations; `reqwest::Client` pools connections
//! internally and is safe for concurrent use without extra locking.
//!
//! There is no explicit shutdown call: dropping the last handle closes the
//! underlying connection pool exactly once, on every exit path.

use reqwest::Url;

use super::config::Config;
use super::error::{Error, Result};

/// Base URL of the Honeybadger REST API.
pub const HONEYBADGER_API_BASE_URL: &str = "https://app.honeybadger.io/v2";

/// Process-lifetime Honeybadger session.
///
/// Holds the shared HTTP client and the immutable upstream configuration.
/// None of the fields can be mutated after construction.
#[derive(Clone)]
pub struct Session {
    client: reqwest::Client,
    project_id: String,
    api_key: String,
    base_url: Url,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Session {
    /// Create a session against the production Honeybadger API.
    ///
    /// Fails with a configuration error if either value is empty.
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(project_id, api_key, HONEYBADGER_API_BASE_URL)
    }

    /// Create a session against an alternative base URL (used by tests to
    /// point at a mock server).
    pub fn with_base_url(
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        let project_id = project_id.into();
        let api_key = api_key.into();

        if project_id.is_empty() {
            return Err(Error::config(
                "HONEYBADGER_PROJECT_ID environment variable is required",
            ));
        }
        if api_key.is_empty() {
            return Err(Error::config(
                "HONEYBADGER_API_KEY environment variable is required",
            ));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid Honeybadger base URL: {}", e)))?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            project_id,
            api_key,
            base_url,
        })
    }

    /// Create a session from the loaded configuration.
    ///
    /// Missing credentials become a fatal configuration error here, before
    /// any transport starts.
    pub fn from_config(config: &Config) -> Result<Self> {
        let project_id = config.credentials.project_id.clone().ok_or_else(|| {
            Error::config("HONEYBADGER_PROJECT_ID environment variable is required")
        })?;
        let api_key = config
            .credentials
            .api_key
            .clone()
            .ok_or_else(|| Error::config("HONEYBADGER_API_KEY environment variable is required"))?;

        Self::new(project_id, api_key)
    }

    /// The shared HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The Honeybadger project this session queries.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The API key, used as the HTTP Basic username on every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The upstream base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// First characters of the API key, for log lines.
    pub fn api_key_prefix(&self) -> String {
        self.api_key.chars().take(4).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_valid() {
        let session = Session::new("proj_42", "hbp_test_key").unwrap();
        assert_eq!(session.project_id(), "proj_42");
        assert_eq!(session.api_key(), "hbp_test_key");
        assert_eq!(session.base_url().as_str(), "https://app.honeybadger.io/v2");
    }

    #[test]
    fn test_session_empty_project_id() {
        let err = Session::new("", "hbp_test_key").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("HONEYBADGER_PROJECT_ID"));
    }

    #[test]
    fn test_session_empty_api_key() {
        let err = Session::new("proj_42", "").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("HONEYBADGER_API_KEY"));
    }

    #[test]
    fn test_from_config_missing_credentials() {
        let config = Config::default();
        let err = Session::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let session = Session::new("proj_42", "super_secret_key").unwrap();
        let debug_str = format!("{:?}", session);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_prefix() {
        let session = Session::new("proj_42", "hbp_test_key").unwrap();
        assert_eq!(session.api_key_prefix(), "hbp_");
    }
}
