use ghinspect_core::Credential;
use ghinspect_core::endpoint::identity_url;
use std::time::Duration;
use url::Url;

/// Default for `--timeout`, in seconds.
pub const DEFAULT_TIMEOUT_SECS: &str = "10.0";

/// Everything one inspection needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub credential: Option<Credential>,
    pub timeout: Duration,
    pub identity_url: Url,
}

impl InspectConfig {
    pub fn new(credential: Option<Credential>, timeout: Duration, identity_url: Url) -> Self {
        Self {
            credential,
            timeout,
            identity_url,
        }
    }
}

/// clap value parser for `--timeout`: positive, finite seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got `{value}`"));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| format!("timeout `{value}` is out of range: {e}"))
}

/// clap value parser for `--api-url`: returns the identity endpoint under it.
pub fn parse_api_url(value: &str) -> Result<Url, String> {
    identity_url(value).map_err(|e| e.to_string())
}
