use ghinspect_core::endpoint::{ACCEPT, USER_AGENT};
use ghinspect_core::{Credential, RequestOutcome};
use reqwest::header;
use std::error::Error as StdError;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

/// The request never produced a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(error_chain(&err))
        }
    }
}

/// Client for the GitHub identity endpoint.
pub struct GithubClient {
    http: reqwest::Client,
    identity_url: Url,
}

impl GithubClient {
    pub fn new(identity_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, identity_url })
    }

    /// Send the one authenticated `GET` and read the whole response.
    ///
    /// Elapsed time covers sending the request through reading the body.
    pub async fn fetch_identity(
        &self,
        credential: &Credential,
    ) -> Result<RequestOutcome, TransportError> {
        tracing::debug!("GET {}", self.identity_url);

        let started = Instant::now();
        let response = self
            .http
            .get(self.identity_url.clone())
            .bearer_auth(credential.expose())
            .header(header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(
            "Received HTTP {} ({} bytes) in {} ms",
            status.as_u16(),
            bytes.len(),
            elapsed_ms
        );

        Ok(RequestOutcome {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            elapsed_ms,
        })
    }
}

/// Render an error with its sources, outermost first.
fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !rendered.ends_with(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}
