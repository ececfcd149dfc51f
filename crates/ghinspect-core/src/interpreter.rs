use crate::endpoint::IDENTITY_PATH;
use crate::outcome::{ACCEPTED_OAUTH_SCOPES, OAUTH_SCOPES, RequestOutcome};
use crate::report::{
    ErrorInfo, ExitStatus, FailureMeta, Meta, RateLimitInfo, Report, ScopeSet, UserProfile,
};
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Why an invocation did not produce a valid report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("Missing token. Provide --token or set GITHUB_TOKEN.")]
    MissingCredential,

    #[error("Request timed out")]
    Timeout,

    #[error("Network error")]
    Network(String),

    #[error("Authentication rejected with HTTP {0}")]
    AuthRejected(u16),

    #[error("Request failed with HTTP {0}")]
    Http(u16),

    #[error("Response body is not JSON")]
    MalformedErrorBody,
}

impl Failure {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Failure::MissingCredential => ExitStatus::MissingCredential,
            Failure::AuthRejected(_) => ExitStatus::AuthRejected,
            Failure::Timeout | Failure::Network(_) | Failure::Http(_) | Failure::MalformedErrorBody => {
                ExitStatus::Failure
            }
        }
    }

    fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Failure::AuthRejected(status.as_u16()),
            _ => Failure::Http(status.as_u16()),
        }
    }
}

/// A report together with the reason it is not valid, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub report: Report,
    pub failure: Option<Failure>,
}

impl Verdict {
    pub fn exit_status(&self) -> ExitStatus {
        self.failure
            .as_ref()
            .map_or(ExitStatus::Success, Failure::exit_status)
    }
}

/// Turns the result of the identity request into a [`Verdict`].
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    pub fn missing_credential() -> Verdict {
        Self::bare_failure(Failure::MissingCredential, None)
    }

    pub fn timed_out() -> Verdict {
        Self::bare_failure(Failure::Timeout, None)
    }

    pub fn network_error(detail: impl Into<String>) -> Verdict {
        let detail = detail.into();
        Self::bare_failure(Failure::Network(detail.clone()), Some(detail))
    }

    /// Interpret a received response, whatever its status.
    pub fn interpret(outcome: &RequestOutcome) -> Verdict {
        let meta = Self::meta(outcome);

        if outcome.status == StatusCode::OK {
            match serde_json::from_str::<Value>(&outcome.body) {
                Ok(body) => {
                    tracing::debug!("Identity request succeeded in {} ms", outcome.elapsed_ms);
                    return Verdict {
                        report: Report::Valid {
                            user: UserProfile::from_json(&body),
                            meta,
                        },
                        failure: None,
                    };
                }
                Err(e) => tracing::debug!("HTTP 200 body is not JSON: {}", e),
            }
        }

        let failure = Failure::from_status(outcome.status);
        tracing::info!("{}", failure);

        let message = error_message(&outcome.body).unwrap_or_else(|e| {
            tracing::debug!("{}, falling back to raw text", e);
            raw_text_message(&outcome.body)
        });

        Verdict {
            report: Report::Invalid {
                error: ErrorInfo {
                    message,
                    detail: None,
                    status: Some(outcome.status.as_u16()),
                },
                meta: Some(FailureMeta {
                    endpoint: IDENTITY_PATH.to_string(),
                }),
            },
            failure: Some(failure),
        }
    }

    fn meta(outcome: &RequestOutcome) -> Meta {
        Meta {
            ok: outcome.status.is_success(),
            status: outcome.status.as_u16(),
            endpoint: IDENTITY_PATH.to_string(),
            response_time_ms: outcome.elapsed_ms,
            scopes: ScopeSet::parse(outcome.header(&OAUTH_SCOPES).as_deref()),
            accepted_scopes_for_endpoint: ScopeSet::parse(
                outcome.header(&ACCEPTED_OAUTH_SCOPES).as_deref(),
            ),
            rate_limit: RateLimitInfo::from_outcome(outcome),
        }
    }

    fn bare_failure(failure: Failure, detail: Option<String>) -> Verdict {
        tracing::info!("{}", failure);

        let mut error = ErrorInfo::new(failure.to_string());
        error.detail = detail;

        Verdict {
            report: Report::Invalid { error, meta: None },
            failure: Some(failure),
        }
    }
}

/// The `message` field of a JSON error body; `null` when the JSON has none.
fn error_message(body: &str) -> Result<Value, Failure> {
    let parsed: Value = serde_json::from_str(body).map_err(|_| Failure::MalformedErrorBody)?;
    Ok(parsed.get("message").cloned().unwrap_or(Value::Null))
}

fn raw_text_message(body: &str) -> Value {
    if body.is_empty() {
        Value::String("Unknown error".to_string())
    } else {
        Value::String(body.trim().to_string())
    }
}
