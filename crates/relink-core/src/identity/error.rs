//! Rejection reasons for identity ("me") URL normalization.

use thiserror::Error;

/// Why an identity string could not be turned into an [`IdentityUrl`](super::IdentityUrl).
///
/// All variants are terminal: no partial URL is produced and no request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("identity URL is empty")]
    Empty,

    #[error("identity URL has no host: {input:?}")]
    MissingHost { input: String },

    #[error("unsupported scheme {scheme:?} in identity URL (only http and https are allowed)")]
    UnsupportedScheme { scheme: String },

    #[error("malformed identity URL {input:?}: {source}")]
    Malformed {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
