//! Fragment loader.
//!
//! Once the page is complete, resolves the site selection from the page URL,
//! fetches each fragment with one GET and applies the outcome to the
//! container: 200 appends the fragment body, 404 replaces the content with
//! the not-found message, anything else replaces it with the error message.
//! Aggregate selections issue their two requests one after the other and
//! each outcome is applied on its own.

mod report;
mod trigger;

pub use report::{FragmentOutcome, FragmentRecord, LoadReport};
pub use trigger::{LoadTrigger, ReadyState};

use crate::config::SiteConfig;
use crate::fetch::{FetchStatus, FragmentSource};
use crate::fragment_url::fragment_url;
use crate::page::{fragment_body, Container};
use crate::site_id::{query_site, resolve_selection, SelectionRules, SiteId};
use url::Url;

/// Loader knobs, normally taken from [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub rules: SelectionRules,
    pub fragment_dir: String,
    pub not_found_message: String,
    pub error_message: String,
}

impl LoaderSettings {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self {
            rules: SelectionRules::from_config(cfg),
            fragment_dir: cfg.fragment_dir.clone(),
            not_found_message: cfg.not_found_message.clone(),
            error_message: cfg.error_message.clone(),
        }
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

pub struct FragmentLoader<S> {
    source: S,
    settings: LoaderSettings,
}

impl<S: FragmentSource> FragmentLoader<S> {
    pub fn new(source: S, settings: LoaderSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Runs [`load`](Self::load) if `state` is the first `Complete` the
    /// trigger has seen; otherwise does nothing.
    pub fn load_when_ready<C: Container>(
        &self,
        trigger: &mut LoadTrigger,
        state: ReadyState,
        page_url: &Url,
        container: &mut C,
    ) -> Option<LoadReport> {
        if !trigger.observe(state) {
            return None;
        }
        Some(self.load(page_url, container))
    }

    /// Loads the fragment(s) selected by `page_url` into `container`.
    pub fn load<C: Container>(&self, page_url: &Url, container: &mut C) -> LoadReport {
        let selection = match resolve_selection(page_url, &self.settings.rules) {
            Ok(sel) => sel,
            Err(e) => {
                tracing::warn!("{}", e);
                container.replace_text(&self.settings.not_found_message);
                let raw = query_site(page_url).unwrap_or_default();
                return LoadReport {
                    selection: None,
                    fragments: vec![FragmentRecord {
                        site: raw,
                        url: None,
                        outcome: FragmentOutcome::Rejected {
                            reason: e.to_string(),
                        },
                    }],
                };
            }
        };
        tracing::info!("loading {:?} for {}", selection, page_url);

        let fragments = selection
            .sites()
            .into_iter()
            .map(|id| self.load_one(page_url, id, container))
            .collect();

        LoadReport {
            selection: Some(selection),
            fragments,
        }
    }

    fn load_one<C: Container>(&self, page_url: &Url, id: &SiteId, container: &mut C) -> FragmentRecord {
        let url = match fragment_url(page_url, &self.settings.fragment_dir, id) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("fragment {}: {}", id, e);
                container.replace_text(&self.settings.error_message);
                return FragmentRecord {
                    site: id.to_string(),
                    url: None,
                    outcome: FragmentOutcome::Failed {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let outcome = match self.source.fetch(&url) {
            Ok(resp) => match resp.classify() {
                FetchStatus::Found => {
                    let body = fragment_body(&resp.body);
                    container.append_html(&body);
                    tracing::debug!("appended {} ({} bytes)", url, body.len());
                    FragmentOutcome::Appended { bytes: body.len() }
                }
                FetchStatus::Missing => {
                    tracing::info!("{} not found", url);
                    container.replace_text(&self.settings.not_found_message);
                    FragmentOutcome::NotFound
                }
                FetchStatus::Unexpected(code) => {
                    tracing::warn!("{} returned HTTP {}", url, code);
                    container.replace_text(&self.settings.error_message);
                    FragmentOutcome::Failed {
                        reason: format!("HTTP {}", code),
                    }
                }
            },
            Err(e) => {
                tracing::warn!("GET {} failed: {}", url, e);
                container.replace_text(&self.settings.error_message);
                FragmentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        FragmentRecord {
            site: id.to_string(),
            url: Some(url),
            outcome,
        }
    }
}
