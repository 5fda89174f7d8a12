//! Fragment fetching.
//!
//! One GET per fragment, no retries. The loader only sees the
//! [`FragmentSource`] trait; [`CurlSource`] talks HTTP through libcurl and
//! [`DirectorySource`] reads a local site tree laid out like the server.

mod directory;
mod error;
mod http;
mod status;

pub use directory::DirectorySource;
pub use error::FetchError;
pub use http::CurlSource;
pub use status::FetchStatus;

use url::Url;

/// Status and decoded body of one fragment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    /// Body as UTF-8; invalid sequences are replaced.
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u32, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn classify(&self) -> FetchStatus {
        FetchStatus::from_code(self.status)
    }
}

/// Where fragments come from.
pub trait FragmentSource {
    /// Issues exactly one request for `url`.
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

impl<S: FragmentSource + ?Sized> FragmentSource for &S {
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        (**self).fetch(url)
    }
}
