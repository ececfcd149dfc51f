mod profile;
mod rate_limit;
mod scopes;

pub use profile::UserProfile;
pub use rate_limit::RateLimitInfo;
pub use scopes::ScopeSet;

use crate::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Response metadata attached to a successful report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub ok: bool,
    pub status: u16,
    pub endpoint: String,
    pub response_time_ms: u64,
    pub scopes: ScopeSet,
    pub accepted_scopes_for_endpoint: ScopeSet,
    pub rate_limit: RateLimitInfo,
}

/// The reduced metadata carried by failure reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureMeta {
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    /// Usually a string; copied verbatim from an API error body, so it may
    /// also be `null` or any other JSON value.
    pub message: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Value::String(message.into()),
            detail: None,
            status: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// The single JSON object printed per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Valid {
        user: UserProfile,
        meta: Meta,
    },
    Invalid {
        error: ErrorInfo,
        meta: Option<FailureMeta>,
    },
}

impl Report {
    /// Compact, single-line JSON. Key order is fixed, so equal reports
    /// always produce identical bytes.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Report::Valid { user, meta } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("valid", &true)?;
                map.serialize_entry("user", user)?;
                map.serialize_entry("meta", meta)?;
                map.end()
            }
            Report::Invalid { error, meta } => {
                let mut map = serializer.serialize_map(Some(2 + usize::from(meta.is_some())))?;
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("error", error)?;
                if let Some(meta) = meta {
                    map.serialize_entry("meta", meta)?;
                }
                map.end()
            }
        }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Token is valid and the profile was fetched.
    Success,
    /// Network, timeout or any non-auth HTTP failure.
    Failure,
    MissingCredential,
    /// The API answered 401 or 403.
    AuthRejected,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::MissingCredential => 2,
            ExitStatus::AuthRejected => 3,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
