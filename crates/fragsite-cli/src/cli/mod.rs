//! CLI for fragsite.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fragsite_core::config::{self, SiteConfig};
use std::path::PathBuf;

use commands::{run_check_email, run_prune, run_render, run_resolve, run_subscribe};

/// Top-level CLI for fragsite.
#[derive(Debug, Parser)]
#[command(name = "fragsite")]
#[command(about = "fragsite: assemble site pages from HTML fragments", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE instead of ~/.config/fragsite/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the fragment(s) selected by PAGE_URL into a page template.
    Render {
        /// Page URL; its `q` parameter selects the fragment.
        page_url: String,
        /// Page template containing the container element.
        #[arg(long, value_name = "FILE")]
        template: PathBuf,
        /// Write the assembled page here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Read fragments from this site tree instead of fetching them.
        #[arg(long, value_name = "DIR")]
        local_root: Option<PathBuf>,
    },

    /// Keep only the <subsite> selected by PAGE_URL in an inline-subsite page.
    Prune {
        /// Page URL; its `q` parameter selects the subsite.
        page_url: String,
        /// Page carrying all subsites.
        #[arg(long, value_name = "FILE")]
        template: PathBuf,
        /// Write the pruned page here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show which fragment URLs PAGE_URL would load, without fetching.
    Resolve {
        page_url: String,
    },

    /// Check an email address the way the lead form does.
    CheckEmail {
        email: String,
    },

    /// Leave an email address on the lead form and print the track link.
    Subscribe {
        /// Address to submit.
        #[arg(long)]
        email: String,
        /// Message field; the configured default when omitted.
        #[arg(long)]
        message: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render {
                page_url,
                template,
                output,
                local_root,
            } => run_render(&cfg, &page_url, &template, output.as_deref(), local_root).await?,
            CliCommand::Prune {
                page_url,
                template,
                output,
            } => run_prune(&cfg, &page_url, &template, output.as_deref())?,
            CliCommand::Resolve { page_url } => run_resolve(&cfg, &page_url)?,
            CliCommand::CheckEmail { email } => run_check_email(&email)?,
            CliCommand::Subscribe { email, message } => {
                run_subscribe(&cfg, email, message).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
