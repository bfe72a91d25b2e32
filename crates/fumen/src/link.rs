//! Turning a command argument (raw code, fumen link or short link) into a code.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use crate::error::LinkError;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+@\S+").expect("static regex"));

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 10;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pull a `v<digits>@<data>` code out of raw text or a direct link.
///
/// # Examples
///
/// ```
/// use fumen_render_fumen::extract_code;
///
/// assert_eq!(extract_code("v115@vhAAgH").as_deref(), Some("v115@vhAAgH"));
/// assert_eq!(
///     extract_code("https://harddrop.com/fumen/?v115@vhAAgH").as_deref(),
///     Some("v115@vhAAgH")
/// );
/// assert_eq!(extract_code("https://tinyurl.com/abcd"), None);
/// ```
pub fn extract_code(text: &str) -> Option<String> {
    CODE_RE.find(text).map(|m| format!("v{}", m.as_str()))
}

fn is_http_url(text: &str) -> bool {
    text.starts_with("https://") || text.starts_with("http://")
}

/// Resolve a command argument into fumen text.
///
/// Literal codes are returned as-is. Other `http(s)` URLs get one HEAD request
/// with redirects followed, and the code is taken from the final URL.
pub async fn resolve_argument(argument: &str) -> Result<String, LinkError> {
    if let Some(code) = extract_code(argument) {
        return Ok(code);
    }
    if !is_http_url(argument) {
        return Err(LinkError::NotFumen(argument.to_string()));
    }

    let client = reqwest::Client::builder()
        .redirect(Policy::limited(MAX_REDIRECTS))
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.head(argument).send().await.inspect_err(|e| {
        warn!(url = argument, error = %e, "link resolution failed");
    })?;

    let final_url = response.url().as_str();
    debug!(from = argument, to = final_url, "followed link");
    extract_code(final_url).ok_or_else(|| LinkError::NotFumen(final_url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefixes_version_marker() {
        assert_eq!(extract_code("m115@vhAAgH").as_deref(), Some("v115@vhAAgH"));
        assert_eq!(extract_code("115@vhAAgH").as_deref(), Some("v115@vhAAgH"));
    }

    #[test]
    fn test_http_detection() {
        assert!(is_http_url("https://tinyurl.com/x"));
        assert!(is_http_url("http://tinyurl.com/x"));
        assert!(!is_http_url("ftp://tinyurl.com/x"));
    }

    #[tokio::test]
    async fn test_resolve_literal_code_skips_network() {
        let code = resolve_argument("v115@vhAAgH").await.unwrap();
        assert_eq!(code, "v115@vhAAgH");
    }

    #[tokio::test]
    async fn test_resolve_rejects_non_links() {
        let err = resolve_argument("not-a-fumen").await.unwrap_err();
        assert!(matches!(err, LinkError::NotFumen(_)));
    }
}
