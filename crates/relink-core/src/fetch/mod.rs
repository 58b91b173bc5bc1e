//! The single HTTP GET behind each discovery.
//!
//! Uses the curl crate (libcurl) to fetch an identity URL and capture the
//! `Link` headers of the final response, the status code and the effective
//! URL after redirects. The body is read and dropped.

mod error;
mod parse;

pub use error::{classify_curl_error, TransportError, TransportFailureKind};

use std::str;
use std::time::Duration;

use crate::config::DiscoveryConfig;

/// What one GET yields for endpoint discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkResponse {
    /// HTTP status of the final response (not used to decide success).
    pub status: u32,
    /// URL of the final response after redirects, if libcurl reports one.
    pub effective_url: Option<String>,
    /// Every `Link` header value of the final response, in arrival order.
    pub links: Vec<String>,
}

/// Performs a GET with no custom request headers and returns its `Link` headers.
///
/// Redirect and timeout behavior come from `config`; there are no retries.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_link_headers(
    url: &str,
    config: &DiscoveryConfig,
) -> Result<LinkResponse, TransportError> {
    let fail = |e: curl::Error| TransportError::new(url, e);
    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(fail)?;
    easy.get(true).map_err(fail)?;
    easy.follow_location(config.follow_redirects).map_err(fail)?;
    easy.max_redirections(config.max_redirections).map_err(fail)?;
    easy.connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .map_err(fail)?;
    easy.timeout(Duration::from_secs(config.timeout_secs))
        .map_err(fail)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                lines.push(parse::header_line(data));
                true
            })
            .map_err(fail)?;
        transfer.write_function(|data| Ok(data.len())).map_err(fail)?;
        transfer.perform().map_err(fail)?;
    }

    let status = easy.response_code().map_err(fail)?;
    let effective_url = easy.effective_url().map_err(fail)?.map(str::to_string);
    tracing::debug!(url, status, effective_url = ?effective_url, "GET completed");

    Ok(LinkResponse {
        status,
        effective_url,
        links: parse::link_values(&lines),
    })
}
