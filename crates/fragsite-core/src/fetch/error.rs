//! Fetch error type: the request never produced an HTTP status.

use std::io;

/// A fragment request that failed before a status line arrived (timeout,
/// connection refused, DNS) or whose source could not be read.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("no response code")]
    NoStatus,
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
