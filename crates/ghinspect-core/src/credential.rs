use std::fmt;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// An opaque bearer token.
///
/// The value is only reachable through [`Credential::expose`]; `Debug` output
/// is redacted so the token cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Pick the explicit token if it is non-empty, otherwise the environment value.
    pub fn resolve(explicit: Option<String>, env: Option<String>) -> Option<Self> {
        explicit
            .and_then(Self::new)
            .or_else(|| env.and_then(Self::new))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}
