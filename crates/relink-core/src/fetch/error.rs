//! Transport failures of the discovery GET and their classification for logs.

use std::fmt;
use thiserror::Error;

/// The GET never produced a response (DNS, connect, TLS, timeout, redirect loop).
#[derive(Debug, Error)]
#[error("GET {url} failed: {source}")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: curl::Error,
}

impl TransportError {
    pub(crate) fn new(url: &str, source: curl::Error) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> TransportFailureKind {
        classify_curl_error(&self.source)
    }
}

/// Coarse failure class, reported alongside the libcurl message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    Timeout,
    Dns,
    Connect,
    Tls,
    TooManyRedirects,
    Other,
}

impl fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportFailureKind::Timeout => "timeout",
            TransportFailureKind::Dns => "dns",
            TransportFailureKind::Connect => "connect",
            TransportFailureKind::Tls => "tls",
            TransportFailureKind::TooManyRedirects => "too many redirects",
            TransportFailureKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// Classify a curl error for diagnostics.
pub fn classify_curl_error(e: &curl::Error) -> TransportFailureKind {
    if e.is_operation_timedout() {
        return TransportFailureKind::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportFailureKind::Dns;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportFailureKind::Connect;
    }
    if e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cipher()
        || e.is_ssl_cacert()
    {
        return TransportFailureKind::Tls;
    }
    if e.is_too_many_redirects() {
        return TransportFailureKind::TooManyRedirects;
    }
    TransportFailureKind::Other
}
