//! Endpoint kinds, per-kind discovery outcomes and the combined endpoint set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// The IndieWeb services discovered from an identity URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    Authorization,
    Token,
    Micropub,
}

impl EndpointKind {
    /// Every kind, in the order results are reported.
    pub const ALL: [EndpointKind; 3] = [
        EndpointKind::Authorization,
        EndpointKind::Token,
        EndpointKind::Micropub,
    ];

    /// Link relation advertising this endpoint.
    pub const fn rel(self) -> &'static str {
        match self {
            EndpointKind::Authorization => "authorization_endpoint",
            EndpointKind::Token => "token_endpoint",
            EndpointKind::Micropub => "micropub",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rel())
    }
}

impl FromStr for EndpointKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EndpointKind::ALL
            .into_iter()
            .find(|kind| kind.rel().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown endpoint relation: {s}"))
    }
}

/// Why a discovery produced no endpoint. Diagnostic only; callers see `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceReason {
    /// The response carried no `Link` header.
    NoLinkHeader,
    /// `Link` headers were present but none had the relation.
    NoMatchingRel,
    /// The first matching target was not a valid URL reference.
    UnparsableCandidate,
    /// The GET failed before a response arrived (DNS, connect, TLS, timeout).
    Transport,
    /// The discovery task itself died (panic on the blocking pool).
    TaskFailed,
}

impl fmt::Display for AbsenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AbsenceReason::NoLinkHeader => "no Link header",
            AbsenceReason::NoMatchingRel => "no matching rel",
            AbsenceReason::UnparsableCandidate => "unparsable endpoint URL",
            AbsenceReason::Transport => "transport failure",
            AbsenceReason::TaskFailed => "discovery task failed",
        };
        f.write_str(s)
    }
}

/// Result of one discovery for one endpoint kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    Found(Url),
    Absent(AbsenceReason),
}

impl DiscoveryOutcome {
    pub fn into_url(self) -> Option<Url> {
        match self {
            DiscoveryOutcome::Found(url) => Some(url),
            DiscoveryOutcome::Absent(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DiscoveryOutcome::Found(_))
    }
}

/// Endpoints advertised by one identity URL. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSet {
    pub authorization_endpoint: Option<Url>,
    pub token_endpoint: Option<Url>,
    pub micropub: Option<Url>,
}

impl EndpointSet {
    pub fn get(&self, kind: EndpointKind) -> Option<&Url> {
        match kind {
            EndpointKind::Authorization => self.authorization_endpoint.as_ref(),
            EndpointKind::Token => self.token_endpoint.as_ref(),
            EndpointKind::Micropub => self.micropub.as_ref(),
        }
    }

    /// Stores the outcome for `kind`. Each field is written at most once per set.
    pub(crate) fn record(&mut self, kind: EndpointKind, outcome: DiscoveryOutcome) {
        let slot = match kind {
            EndpointKind::Authorization => &mut self.authorization_endpoint,
            EndpointKind::Token => &mut self.token_endpoint,
            EndpointKind::Micropub => &mut self.micropub,
        };
        debug_assert!(slot.is_none(), "{kind} recorded twice");
        *slot = outcome.into_url();
    }

    pub fn is_empty(&self) -> bool {
        EndpointKind::ALL.iter().all(|k| self.get(*k).is_none())
    }

    pub fn is_complete(&self) -> bool {
        EndpointKind::ALL.iter().all(|k| self.get(*k).is_some())
    }
}
