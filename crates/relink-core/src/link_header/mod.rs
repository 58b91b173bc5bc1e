//! `Link` response header matching (Web Linking, RFC 8288).
//!
//! Pure string processing: given a header value such as
//! `<https://example.com/auth>; rel="authorization_endpoint"` and a relation
//! name, returns the target URLs of the entries carrying that relation.

mod split;

use regex::Regex;
use std::sync::OnceLock;

use split::{split_top_level, unquote};

/// Capture group of [`entry_pattern`] holding the link target.
const URL_GROUP: usize = 1;
/// Capture group of [`entry_pattern`] holding the `; name=value` parameters.
const PARAMS_GROUP: usize = 2;

/// `<target>` followed by the parameter list.
fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)^\s*<([^>]*)>(.*)$").expect("valid link entry regex"))
}

/// Extracts the target URLs of all entries in `header_value` whose `rel`
/// includes `rel`.
///
/// Exactly one URL is returned per matching entry, in header order. The `rel`
/// value may be quoted or bare and may list several space-separated relation
/// types; comparison is ASCII case-insensitive. Only the first `rel`
/// parameter of an entry counts. Other parameters are ignored.
pub fn extract_rel_links(header_value: &str, rel: &str) -> Vec<String> {
    split_top_level(header_value, ',')
        .into_iter()
        .filter_map(|entry| match_entry(entry, rel))
        .collect()
}

/// Runs [`extract_rel_links`] over several `Link` header field values, in order.
pub fn extract_rel_links_all<S: AsRef<str>>(values: &[S], rel: &str) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| extract_rel_links(value.as_ref(), rel))
        .collect()
}

fn match_entry(entry: &str, rel: &str) -> Option<String> {
    let caps = entry_pattern().captures(entry)?;
    let target = caps.get(URL_GROUP)?.as_str().trim();
    // `<>` names the current document, never an endpoint.
    if target.is_empty() {
        return None;
    }
    let params = caps.get(PARAMS_GROUP).map_or("", |m| m.as_str());

    let rel_value = rel_param(params)?;
    rel_value
        .split_ascii_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(rel))
        .then(|| target.to_string())
}

/// Value of the first `rel` parameter, unquoted.
fn rel_param(params: &str) -> Option<String> {
    split_top_level(params, ';').into_iter().find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("rel")
            .then(|| unquote(value))
    })
}
