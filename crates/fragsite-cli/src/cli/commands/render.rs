//! `fragsite render <page-url> --template <file>` – assemble one page.

use super::{parse_page_url, read_template, write_output};
use anyhow::{Context, Result};
use fragsite_core::config::SiteConfig;
use fragsite_core::fetch::{CurlSource, DirectorySource, FragmentSource};
use fragsite_core::loader::{FragmentLoader, LoadReport, LoadTrigger, LoaderSettings, ReadyState};
use fragsite_core::page::PageView;
use std::path::{Path, PathBuf};

pub async fn run_render(
    cfg: &SiteConfig,
    page_url: &str,
    template: &Path,
    output: Option<&Path>,
    local_root: Option<PathBuf>,
) -> Result<()> {
    let url = parse_page_url(page_url)?;
    let mut trigger = LoadTrigger::new();
    trigger.observe(ReadyState::Loading);

    let html = read_template(template)?;
    let container_id = cfg.container_id.clone();
    let template_name = template.display().to_string();
    trigger.observe(ReadyState::Interactive);

    let settings = LoaderSettings::from_config(cfg);
    let fetch_cfg = cfg.fetch_or_default();
    // The parsed page is not Send, so it lives entirely on the blocking thread.
    let (rendered, report) = tokio::task::spawn_blocking(move || -> Result<_> {
        let mut page = PageView::bind(&html, &container_id)
            .with_context(|| format!("template {}", template_name))?;
        let source: Box<dyn FragmentSource + Send> = match local_root {
            Some(root) => Box::new(DirectorySource::new(root)),
            None => Box::new(CurlSource::new(&fetch_cfg)),
        };
        let loader = FragmentLoader::new(&*source, settings);
        let report = loader.load_when_ready(&mut trigger, ReadyState::Complete, &url, &mut page);
        Ok((page.render(), report))
    })
    .await??;

    if let Some(report) = &report {
        print_summary(report);
    }
    write_output(output, &rendered)
}

fn print_summary(report: &LoadReport) {
    for record in &report.fragments {
        let target = record
            .url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "-".to_string());
        eprintln!("{:<12} {:<48} {}", record.site, target, record.outcome);
    }
}
