use crate::{Error, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Path reported in every report's `meta.endpoint`.
pub const IDENTITY_PATH: &str = "/user";

pub const USER_AGENT: &str = "github-token-inspector";

pub const ACCEPT: &str = "application/vnd.github+json";

/// Build the identity endpoint URL under an API base.
///
/// The base may carry a path prefix (GitHub Enterprise serves the API under
/// `/api/v3`), so the segment is appended rather than joined.
pub fn identity_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| Error::InvalidBaseUrl(format!("{base}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl(format!(
            "{base}: unsupported scheme `{}`",
            url.scheme()
        )));
    }

    url.path_segments_mut()
        .map_err(|_| Error::InvalidBaseUrl(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .push(IDENTITY_PATH.trim_start_matches('/'));
    url.set_query(None);

    Ok(url)
}
