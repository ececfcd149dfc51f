use crate::outcome::{
    RATE_LIMIT_LIMIT, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET, RATE_LIMIT_RESOURCE, RequestOutcome,
};
use http::HeaderName;
use std::borrow::Cow;
use serde::Serialize;

/// Raw `X-RateLimit-*` header values. Missing headers serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    pub limit: Option<String>,
    pub remaining: Option<String>,
    pub reset: Option<String>,
    pub resource: Option<String>,
}

impl RateLimitInfo {
    pub fn from_outcome(outcome: &RequestOutcome) -> Self {
        let header = |name: &HeaderName| outcome.header(name).map(Cow::into_owned);

        Self {
            limit: header(&RATE_LIMIT_LIMIT),
            remaining: header(&RATE_LIMIT_REMAINING),
            reset: header(&RATE_LIMIT_RESET),
            resource: header(&RATE_LIMIT_RESOURCE),
        }
    }
}
