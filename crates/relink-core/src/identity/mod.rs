//! Identity ("me") URL normalization.
//!
//! Turns free text typed by a user (`eddiehinkle.com`, `https://example.com`,
//! `localhost:8080/me`) into a canonical HTTP(S) URL with a path and without
//! query or fragment. Anything else is rejected before any network activity.

mod error;

pub use error::IdentityError;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Scheme used when the input has none.
const DEFAULT_SCHEME: &str = "http";

/// A validated, canonical identity URL.
///
/// Scheme is `http` or `https`, host is non-empty, path is at least `/`, and
/// there is no query or fragment. Only [`normalize`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentityUrl(Url);

impl IdentityUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for IdentityUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for IdentityUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<IdentityUrl> for Url {
    fn from(identity: IdentityUrl) -> Self {
        identity.0
    }
}

impl FromStr for IdentityUrl {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Normalizes a user-entered identity string into an [`IdentityUrl`].
///
/// - No scheme and no host (`example.com/me`): the text up to the first `/`,
///   `?` or `#` is the host, the rest the path, and the scheme is `http`.
/// - `host:port[/path]` without `//` is treated the same way.
/// - `//host[/path]` has a host but no scheme and gets `http`.
/// - Any scheme other than `http`/`https` is rejected.
/// - Query, fragment and user info are dropped; an empty path becomes `/`.
///
/// # Examples
///
/// - `normalize("eddiehinkle.com")` → `http://eddiehinkle.com/`
/// - `normalize("https://example.com")` → `https://example.com/`
/// - `normalize("ftp://example.com")` → `Err(UnsupportedScheme)`
pub fn normalize(input: &str) -> Result<IdentityUrl, IdentityError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(IdentityError::Empty);
    }

    let mut url = match Url::parse(input) {
        Ok(parsed) if is_http_scheme(parsed.scheme()) => parsed,
        Ok(parsed) if is_host_and_port(input, parsed.scheme()) => parse_bare(input)?,
        Ok(parsed) => {
            tracing::debug!(scheme = parsed.scheme(), "rejecting identity URL scheme");
            return Err(IdentityError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        Err(url::ParseError::RelativeUrlWithoutBase) if input.starts_with("//") => {
            Url::parse(&format!("{DEFAULT_SCHEME}:{input}")).map_err(|e| parse_error(input, e))?
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => parse_bare(input)?,
        Err(source) => return Err(parse_error(input, source)),
    };

    if url.host_str().map_or(true, str::is_empty) {
        return Err(IdentityError::MissingHost {
            input: input.to_string(),
        });
    }

    url.set_query(None);
    url.set_fragment(None);
    // Cannot fail once a host is present.
    let _ = url.set_password(None);
    let _ = url.set_username("");
    if url.path().is_empty() {
        url.set_path("/");
    }

    Ok(IdentityUrl(url))
}

fn is_http_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

/// True for inputs like `localhost:8080/me`, which the URL parser reads as
/// scheme `localhost` with an opaque path.
fn is_host_and_port(input: &str, scheme: &str) -> bool {
    input
        .get(scheme.len()..)
        .and_then(|rest| rest.strip_prefix(':'))
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Parses `host[/path][?query][#fragment]` by prefixing the default scheme.
fn parse_bare(input: &str) -> Result<Url, IdentityError> {
    let host = input.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(IdentityError::MissingHost {
            input: input.to_string(),
        });
    }
    Url::parse(&format!("{DEFAULT_SCHEME}://{input}")).map_err(|e| parse_error(input, e))
}

fn parse_error(input: &str, source: url::ParseError) -> IdentityError {
    match source {
        url::ParseError::EmptyHost => IdentityError::MissingHost {
            input: input.to_string(),
        },
        source => IdentityError::Malformed {
            input: input.to_string(),
            source,
        },
    }
}
