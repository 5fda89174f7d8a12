//! Fragment source backed by a local site tree.
//!
//! The URL path below the origin maps onto a file under `root`, so
//! `https://me.example/sites/home.html` reads `<root>/sites/home.html`.
//! Missing files answer 404, like the static server would.

use super::{FetchError, FetchResponse, FragmentSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File for `url`, or `None` when the path would leave `root` or uses
    /// escapes we don't decode.
    fn resolve(&self, url: &Url) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for segment in url.path_segments()? {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('%') {
                return None;
            }
            path.push(segment);
        }
        Some(path)
    }
}

impl FragmentSource for DirectorySource {
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let Some(path) = self.resolve(url) else {
            tracing::debug!("{} does not map into {}", url, self.root.display());
            return Ok(FetchResponse::new(404, ""));
        };
        if path.is_dir() {
            return Ok(FetchResponse::new(404, ""));
        }
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!("read {} ({} bytes)", path.display(), bytes.len());
                Ok(FetchResponse::new(200, String::from_utf8_lossy(&bytes)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FetchResponse::new(404, "")),
            Err(e) => Err(FetchError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}
