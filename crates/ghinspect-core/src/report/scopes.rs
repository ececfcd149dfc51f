use serde::Serialize;

/// Scope names in header order, trimmed, with empty segments dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeSet(Vec<String>);

impl ScopeSet {
    /// Parse a comma-separated header value. `None` yields an empty set.
    pub fn parse(value: Option<&str>) -> Self {
        let scopes = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self(scopes)
    }
}
