//! Lead-capture errors.

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// No email given and none remembered for this session.
    #[error("an email address is required")]
    EmailRequired,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("form submission failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("form endpoint sent no HTTP response")]
    NoStatus,
    #[error("form encoding failed: {0}")]
    Encoding(#[from] curl::FormError),
    /// The endpoint answered with a non-2xx status.
    #[error("{}", rejection_message(.status, .detail))]
    Rejected { status: u32, detail: Option<String> },
}

fn rejection_message(status: &u32, detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!("form submission was rejected (HTTP {}): {}", status, d),
        None => format!("form submission was rejected (HTTP {})", status),
    }
}
