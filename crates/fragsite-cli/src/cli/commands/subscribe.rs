//! `fragsite subscribe --email <addr>` – lead-capture form for the track.

use anyhow::{Context, Result};
use fragsite_core::config::SiteConfig;
use fragsite_core::lead::{CurlFormEndpoint, LeadCapture, LeadCaptureState};

pub async fn run_subscribe(cfg: &SiteConfig, email: String, message: Option<String>) -> Result<()> {
    let form_cfg = cfg
        .lead_form
        .clone()
        .context("no [lead_form] section in config")?;
    let timeout = cfg.fetch_or_default().timeout();

    let grant = tokio::task::spawn_blocking(move || {
        let endpoint = CurlFormEndpoint::new(form_cfg.endpoint.clone()).with_timeout(timeout);
        let lead = LeadCapture::from_config(endpoint, &form_cfg);
        let mut state = LeadCaptureState::new();
        lead.request_download(&mut state, Some(&email), message.as_deref())
    })
    .await?
    .context("lead form")?;

    println!("Thanks! Download: {}", grant.download_url);
    Ok(())
}
