//! Allow-list check for identifiers that end up in a request path.

/// Longest accepted identifier.
pub(crate) const MAX_LEN: usize = 64;

/// Why a raw identifier was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier is longer than 64 characters")]
    TooLong,
    /// First character outside `[A-Za-z0-9_-]`.
    #[error("character {0:?} is not allowed")]
    BadChar(char),
}

/// Checks that `raw` is 1..=64 chars of ASCII letters, digits, `-` or `_`.
///
/// Rejects separators, dots (so no `..`), percent escapes, whitespace and
/// anything non-ASCII.
pub(crate) fn check_identifier(raw: &str) -> Result<(), Rejection> {
    if raw.is_empty() {
        return Err(Rejection::Empty);
    }
    if let Some(c) = raw
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Rejection::BadChar(c));
    }
    if raw.len() > MAX_LEN {
        return Err(Rejection::TooLong);
    }
    Ok(())
}
