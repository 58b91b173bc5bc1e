//! Run the three discoveries in parallel and join them into one [`EndpointSet`].
//!
//! Each discovery is a blocking GET on tokio's blocking pool. Outcomes come
//! back as `(kind, outcome)` pairs through a `JoinSet`; only this task owns
//! the set and writes into it, once per kind.

use tokio::task::{JoinHandle, JoinSet};

use crate::config::DiscoveryConfig;
use crate::discover::discover;
use crate::endpoint::{AbsenceReason, DiscoveryOutcome, EndpointKind, EndpointSet};
use crate::identity::{self, IdentityError, IdentityUrl};

/// Discovers all endpoint kinds advertised by `url`.
///
/// Resolves only after every discovery has finished, successfully or not.
/// Never fails: missing, unreachable or unparsable endpoints are `None`.
pub async fn fetch_endpoints(url: &IdentityUrl, config: &DiscoveryConfig) -> EndpointSet {
    let mut join_set = JoinSet::new();
    for kind in EndpointKind::ALL {
        let url = url.clone();
        let config = config.clone();
        join_set.spawn_blocking(move || (kind, discover(kind, &url, &config)));
    }

    let mut endpoints = EndpointSet::default();
    let mut pending = EndpointKind::ALL.to_vec();
    while let Some(res) = join_set.join_next().await {
        match res {
            Ok((kind, outcome)) => {
                pending.retain(|k| *k != kind);
                endpoints.record(kind, outcome);
            }
            Err(e) => tracing::error!("discovery task for {url} failed: {e}"),
        }
    }

    for kind in pending {
        tracing::warn!("{kind} for {url}: {}", AbsenceReason::TaskFailed);
        endpoints.record(kind, DiscoveryOutcome::Absent(AbsenceReason::TaskFailed));
    }

    tracing::info!(
        authorization = endpoints.authorization_endpoint.is_some(),
        token = endpoints.token_endpoint.is_some(),
        micropub = endpoints.micropub.is_some(),
        "endpoint discovery finished for {url}"
    );
    endpoints
}

/// Callback form of [`fetch_endpoints`].
///
/// Spawns the aggregation on the current tokio runtime and calls `completion`
/// exactly once, from that background task, after all discoveries joined.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub fn fetch_endpoints_with<F>(
    url: IdentityUrl,
    config: DiscoveryConfig,
    completion: F,
) -> JoinHandle<()>
where
    F: FnOnce(EndpointSet) + Send + 'static,
{
    tokio::spawn(async move {
        let endpoints = fetch_endpoints(&url, &config).await;
        completion(endpoints);
    })
}

/// Normalizes `input` and discovers its endpoints.
///
/// The only possible error is the normalization rejection; no request is
/// made in that case.
pub async fn discover_identity(
    input: &str,
    config: &DiscoveryConfig,
) -> Result<EndpointSet, IdentityError> {
    let url = identity::normalize(input)?;
    tracing::debug!("normalized {input:?} to {url}");
    Ok(fetch_endpoints(&url, config).await)
}
