//! HTTP fragment source on libcurl.

use super::{FetchError, FetchResponse, FragmentSource};
use crate::config::FetchConfig;
use std::time::Duration;
use url::Url;

/// Fetches fragments over HTTP(S). One Easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlSource {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlSource {
    pub fn new(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }
}

impl Default for CurlSource {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl FragmentSource for CurlSource {
    /// Plain GET, following redirects. Non-2xx statuses are returned, not
    /// turned into errors; only transport failures are `Err`.
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: text/html")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if status == 0 {
            return Err(FetchError::NoStatus);
        }
        tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());

        Ok(FetchResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
