//! What a load did, per fragment.

use crate::site_id::SiteSelection;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// 200: body appended to the container.
    Appended { bytes: usize },
    /// 404: container replaced with the not-found message.
    NotFound,
    /// Other status or transport failure: container replaced with the error message.
    Failed { reason: String },
    /// Identifier refused before any request was made.
    Rejected { reason: String },
}

impl fmt::Display for FragmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentOutcome::Appended { bytes } => write!(f, "appended {} bytes", bytes),
            FragmentOutcome::NotFound => write!(f, "not found"),
            FragmentOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            FragmentOutcome::Rejected { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

/// One requested (or refused) fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRecord {
    /// Identifier as requested (raw text for rejected ones).
    pub site: String,
    /// `None` when no request was issued.
    pub url: Option<Url>,
    pub outcome: FragmentOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// `None` when the `q` value was rejected.
    pub selection: Option<SiteSelection>,
    /// In issue order.
    pub fragments: Vec<FragmentRecord>,
}

impl LoadReport {
    /// Number of requests actually issued.
    pub fn requests_issued(&self) -> usize {
        self.fragments.iter().filter(|r| r.url.is_some()).count()
    }

    pub fn all_appended(&self) -> bool {
        !self.fragments.is_empty()
            && self
                .fragments
                .iter()
                .all(|r| matches!(r.outcome, FragmentOutcome::Appended { .. }))
    }
}
