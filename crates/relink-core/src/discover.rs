//! Discovery of one endpoint kind: one GET, then `Link` header matching.

use url::Url;

use crate::config::DiscoveryConfig;
use crate::endpoint::{AbsenceReason, DiscoveryOutcome, EndpointKind};
use crate::fetch::{self, LinkResponse};
use crate::identity::IdentityUrl;
use crate::link_header;

/// Fetches `url` once and looks for the endpoint of `kind` in its `Link` headers.
///
/// Never fails: transport errors are logged and reported as absence.
/// Blocking; the aggregator runs it on tokio's blocking pool.
pub fn discover(
    kind: EndpointKind,
    url: &IdentityUrl,
    config: &DiscoveryConfig,
) -> DiscoveryOutcome {
    let response = match fetch::fetch_link_headers(url.as_str(), config) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(
                rel = kind.rel(),
                failure = %e.kind(),
                "{kind} discovery failed: {e}"
            );
            return DiscoveryOutcome::Absent(AbsenceReason::Transport);
        }
    };

    let outcome = outcome_from_response(kind, url.as_url(), &response);
    match &outcome {
        DiscoveryOutcome::Found(endpoint) => {
            tracing::info!(rel = kind.rel(), %endpoint, "{kind} found for {url}");
        }
        DiscoveryOutcome::Absent(reason) => {
            tracing::debug!(
                rel = kind.rel(),
                status = response.status,
                "{kind} not found for {url}: {reason}"
            );
        }
    }
    outcome
}

/// Decides the outcome for `kind` from an already received response.
///
/// Only the first matching `Link` target is considered. Relative targets are
/// resolved against the response's effective URL (falling back to
/// `request_url`); if that fails the endpoint is absent.
pub fn outcome_from_response(
    kind: EndpointKind,
    request_url: &Url,
    response: &LinkResponse,
) -> DiscoveryOutcome {
    if response.links.is_empty() {
        return DiscoveryOutcome::Absent(AbsenceReason::NoLinkHeader);
    }

    let candidates = link_header::extract_rel_links_all(&response.links, kind.rel());
    let Some(first) = candidates.first() else {
        return DiscoveryOutcome::Absent(AbsenceReason::NoMatchingRel);
    };

    let base = response
        .effective_url
        .as_deref()
        .and_then(|u| Url::parse(u).ok())
        .unwrap_or_else(|| request_url.clone());

    match base.join(first) {
        Ok(endpoint) => DiscoveryOutcome::Found(endpoint),
        Err(e) => {
            tracing::debug!(rel = kind.rel(), candidate = %first, "unparsable endpoint URL: {e}");
            DiscoveryOutcome::Absent(AbsenceReason::UnparsableCandidate)
        }
    }
}
