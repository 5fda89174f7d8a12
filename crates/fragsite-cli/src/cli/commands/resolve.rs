//! `fragsite resolve <page-url>` – show the fragment URLs a page would load.

use super::parse_page_url;
use anyhow::Result;
use fragsite_core::config::SiteConfig;
use fragsite_core::fragment_url::fragment_url;
use fragsite_core::site_id::{resolve_selection, SelectionRules, SiteSelection};

pub fn run_resolve(cfg: &SiteConfig, page_url: &str) -> Result<()> {
    let url = parse_page_url(page_url)?;
    let selection = resolve_selection(&url, &SelectionRules::from_config(cfg))?;

    match &selection {
        SiteSelection::Single(id) => println!("site: {}", id),
        SiteSelection::Aggregate { alias, sites } => {
            println!("site: {} (aggregate of {}, {})", alias, sites[0], sites[1])
        }
    }
    for id in selection.sites() {
        println!("{}", fragment_url(&url, &cfg.fragment_dir, id)?);
    }
    Ok(())
}
