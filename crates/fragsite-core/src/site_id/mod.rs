//! Site identifier resolution.
//!
//! The page URL's `q` query parameter selects which fragment(s) to load.
//! Absent `q` falls back to the default site; one configured alias expands
//! to two fragments. Identifiers are checked against a strict allow-list
//! before they can be used in a request path.

mod validate;

pub use validate::Rejection;

use crate::config::SiteConfig;
use std::fmt;
use url::Url;

/// Query parameter holding the site identifier.
pub const QUERY_PARAM: &str = "q";

/// A fragment name that passed the allow-list check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteId(String);

impl SiteId {
    pub fn parse(raw: &str) -> Result<Self, SiteIdError> {
        validate::check_identifier(raw).map_err(|reason| SiteIdError::Invalid {
            raw: raw.to_string(),
            reason,
        })?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteIdError {
    #[error("invalid site identifier {raw:?}: {reason}")]
    Invalid { raw: String, reason: Rejection },
}

/// What one page load should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    Single(SiteId),
    /// The aggregate alias; `sites` is in issue order.
    Aggregate { alias: String, sites: [SiteId; 2] },
}

impl SiteSelection {
    /// Identifiers to fetch, in issue order.
    pub fn sites(&self) -> Vec<&SiteId> {
        match self {
            SiteSelection::Single(id) => vec![id],
            SiteSelection::Aggregate { sites, .. } => sites.iter().collect(),
        }
    }
}

/// Default site and aggregate alias, taken from [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct SelectionRules {
    pub default_site: String,
    pub aggregate_alias: String,
    pub aggregate_sites: [String; 2],
}

impl SelectionRules {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        let aggregate = cfg.aggregate_or_default();
        Self {
            default_site: cfg.default_site.clone(),
            aggregate_alias: aggregate.alias,
            aggregate_sites: aggregate.sites,
        }
    }
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Raw `q` value of a page URL: the first occurrence, percent-decoded.
///
/// `None` only when the parameter is absent; `?q=` yields `Some("")`.
pub fn query_site(page_url: &Url) -> Option<String> {
    page_url
        .query_pairs()
        .find(|(k, _)| k == QUERY_PARAM)
        .map(|(_, v)| v.into_owned())
}

/// Resolves the page URL into the fragments to load.
pub fn resolve_selection(
    page_url: &Url,
    rules: &SelectionRules,
) -> Result<SiteSelection, SiteIdError> {
    let raw = query_site(page_url).unwrap_or_else(|| rules.default_site.clone());

    if raw == rules.aggregate_alias {
        let [first, second] = &rules.aggregate_sites;
        return Ok(SiteSelection::Aggregate {
            alias: raw,
            sites: [SiteId::parse(first)?, SiteId::parse(second)?],
        });
    }

    Ok(SiteSelection::Single(SiteId::parse(&raw)?))
}
