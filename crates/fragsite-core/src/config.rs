use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fragment fetch timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Aggregate alias: one `q` value that expands to two fragment fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateConfig {
    pub alias: String,
    pub sites: [String; 2],
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            alias: "all".to_string(),
            sites: ["home".to_string(), "music".to_string()],
        }
    }
}

/// Third-party form endpoint for the track download (optional section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadFormConfig {
    /// URL receiving the multipart `email` + `message` POST.
    pub endpoint: String,
    /// Download link handed out once the form was accepted.
    pub download_url: String,
    /// `message` field sent when the caller gives none.
    #[serde(default = "default_lead_message")]
    pub default_message: String,
}

fn default_lead_message() -> String {
    "Track download request".to_string()
}

/// Global configuration loaded from `~/.config/fragsite/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identifier used when the page URL has no `q` parameter.
    pub default_site: String,
    /// Id of the element that receives fragment content.
    pub container_id: String,
    /// Directory below the origin holding `<id>.html` fragments.
    pub fragment_dir: String,
    /// Literal shown when a fragment answers 404.
    pub not_found_message: String,
    /// Literal shown for any other failed fetch.
    pub error_message: String,
    /// Optional timeouts; built-in defaults when missing.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
    /// Optional aggregate alias; built-in defaults when missing.
    #[serde(default)]
    pub aggregate: Option<AggregateConfig>,
    /// Lead-capture form; `subscribe` refuses to run without it.
    #[serde(default)]
    pub lead_form: Option<LeadFormConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_site: "home".to_string(),
            container_id: "content".to_string(),
            fragment_dir: "sites".to_string(),
            not_found_message: "Page not found.".to_string(),
            error_message: "Page could not be loaded.".to_string(),
            fetch: None,
            aggregate: None,
            lead_form: None,
        }
    }
}

impl SiteConfig {
    pub fn fetch_or_default(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }

    pub fn aggregate_or_default(&self) -> AggregateConfig {
        self.aggregate.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fragsite")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path (no default file is written).
pub fn load_from(path: &Path) -> Result<SiteConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
