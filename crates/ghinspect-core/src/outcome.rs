use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use std::borrow::Cow;

pub const OAUTH_SCOPES: HeaderName = HeaderName::from_static("x-oauth-scopes");
pub const ACCEPTED_OAUTH_SCOPES: HeaderName = HeaderName::from_static("x-accepted-oauth-scopes");
pub const RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
pub const RATE_LIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
pub const RATE_LIMIT_RESOURCE: HeaderName = HeaderName::from_static("x-ratelimit-resource");

/// A received HTTP response, reduced to what the interpreter reads.
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    pub elapsed_ms: u64,
}

impl RequestOutcome {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            elapsed_ms: 0,
        }
    }

    /// Add a header. Values that are not valid header text are ignored.
    pub fn with_header(mut self, name: HeaderName, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Header value as text. A header sent on several lines reads as one
    /// value joined with `", "`; non-UTF-8 lines are skipped. `None` when no
    /// usable line is left.
    pub fn header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        let mut values = self.headers.get_all(name).iter().filter_map(|v| v.to_str().ok());
        let first = values.next()?;

        match values.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut joined = format!("{first}, {second}");
                for value in values {
                    joined.push_str(", ");
                    joined.push_str(value);
                }
                Some(Cow::Owned(joined))
            }
        }
    }
}
