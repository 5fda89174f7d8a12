//! CLI command handlers, one per file.

mod check_email;
mod prune;
mod render;
mod resolve;
mod subscribe;

pub use check_email::run_check_email;
pub use prune::run_prune;
#[cfg(test)]
pub(crate) use prune::kept_sites;
pub use render::run_render;
pub use resolve::run_resolve;
pub use subscribe::run_subscribe;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use url::Url;

fn parse_page_url(raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("invalid page URL {:?}", raw))
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read template {}", path.display()))
}

/// Writes a finished document to `output`, or stdout.
fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
