//! `relink normalize <me>` – print the canonical identity URL.

use anyhow::{Context, Result};
use relink_core::identity;

pub fn run_normalize(me: &str) -> Result<()> {
    let url = identity::normalize(me).with_context(|| format!("cannot use {me:?} as identity URL"))?;
    println!("{url}");
    Ok(())
}
