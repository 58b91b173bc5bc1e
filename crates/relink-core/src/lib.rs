//! IndieWeb endpoint discovery.
//!
//! Normalizes a user's identity ("me") URL and discovers the authorization,
//! token and micropub endpoints it advertises in `Link` response headers.

pub mod config;
pub mod logging;

pub mod aggregate;
pub mod discover;
pub mod endpoint;
pub mod fetch;
pub mod identity;
pub mod link_header;

pub use aggregate::{discover_identity, fetch_endpoints, fetch_endpoints_with};
pub use config::DiscoveryConfig;
pub use endpoint::{AbsenceReason, DiscoveryOutcome, EndpointKind, EndpointSet};
pub use identity::{normalize, IdentityError, IdentityUrl};
