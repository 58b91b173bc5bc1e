//! `relink discover <me>` – discover and print the advertised endpoints.

use anyhow::{Context, Result};
use relink_core::{identity, DiscoveryConfig, EndpointKind, EndpointSet};

pub async fn run_discover(me: &str, cfg: &DiscoveryConfig, json: bool) -> Result<()> {
    let url = identity::normalize(me).with_context(|| format!("cannot use {me:?} as identity URL"))?;
    let endpoints = relink_core::fetch_endpoints(&url, cfg).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&endpoints)?);
    } else {
        println!("me: {url}");
        print!("{}", format_table(&endpoints));
    }
    Ok(())
}

/// One `rel  url` line per endpoint kind; `-` for absent ones.
fn format_table(endpoints: &EndpointSet) -> String {
    let mut out = String::new();
    for kind in EndpointKind::ALL {
        let value = endpoints
            .get(kind)
            .map(|u| u.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("{:<24} {}\n", kind.rel(), value));
    }
    out
}
