//! Classify fragment response codes.

/// How the loader treats a fragment response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Exactly 200: the body is spliced in.
    Found,
    /// 404: the container shows the not-found message.
    Missing,
    /// Anything else, including other 2xx codes.
    Unexpected(u32),
}

impl FetchStatus {
    pub fn from_code(code: u32) -> Self {
        match code {
            200 => FetchStatus::Found,
            404 => FetchStatus::Missing,
            other => FetchStatus::Unexpected(other),
        }
    }
}
