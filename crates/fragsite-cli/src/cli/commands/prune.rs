//! `fragsite prune <page-url> --template <file>` – inline-subsite pages.

use super::{parse_page_url, read_template, write_output};
use anyhow::Result;
use fragsite_core::config::SiteConfig;
use fragsite_core::page::prune_subsites;
use fragsite_core::site_id::{resolve_selection, SelectionRules};
use std::path::Path;
use url::Url;

pub fn run_prune(cfg: &SiteConfig, page_url: &str, template: &Path, output: Option<&Path>) -> Result<()> {
    let url = parse_page_url(page_url)?;
    let keep = kept_sites(cfg, &url);
    let keep: Vec<&str> = keep.iter().map(String::as_str).collect();

    let html = read_template(template)?;
    let (pruned, removed) = prune_subsites(&html, &keep);
    tracing::info!("kept subsites {:?}, removed {}", keep, removed);
    eprintln!("kept subsites {:?}, removed {}", keep, removed);

    write_output(output, &pruned)
}

/// Subsite ids a page URL selects. The aggregate alias keeps every site it
/// stands for; an invalid identifier keeps none, like a missing fragment.
pub(crate) fn kept_sites(cfg: &SiteConfig, url: &Url) -> Vec<String> {
    match resolve_selection(url, &SelectionRules::from_config(cfg)) {
        Ok(selection) => selection.sites().iter().map(|id| id.to_string()).collect(),
        Err(e) => {
            tracing::warn!("{}", e);
            Vec::new()
        }
    }
}
