//! Lead-capture flow for the downloadable track.
//!
//! A visitor leaves an email address; the form posts it to a third-party
//! endpoint and, once accepted, hands out the track's download link. The
//! session remembers the accepted address in an explicit
//! [`LeadCaptureState`], so later requests in the same session go straight
//! to the download without posting again.

mod endpoint;
mod error;

pub use endpoint::{CurlFormEndpoint, FormEndpoint, FormFields, FormReply};
pub use error::LeadError;

use crate::config::LeadFormConfig;
use crate::email::is_valid_email;

/// Per-session state of the lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCaptureState {
    accepted_email: Option<String>,
}

impl LeadCaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the endpoint already accepted in this session.
    pub fn accepted_email(&self) -> Option<&str> {
        self.accepted_email.as_deref()
    }
}

/// Result of a successful request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadGrant {
    pub email: String,
    pub download_url: String,
    /// False when the session's accepted address was reused without posting.
    pub submitted: bool,
}

pub struct LeadCapture<E> {
    endpoint: E,
    download_url: String,
    default_message: String,
}

impl<E: FormEndpoint> LeadCapture<E> {
    pub fn new(endpoint: E, download_url: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            endpoint,
            download_url: download_url.into(),
            default_message: default_message.into(),
        }
    }

    pub fn from_config(endpoint: E, cfg: &LeadFormConfig) -> Self {
        Self::new(endpoint, cfg.download_url.clone(), cfg.default_message.clone())
    }

    /// Validates the address, posts it unless this session already had it
    /// accepted, and returns the download link.
    ///
    /// `email` falls back to the session's accepted address. `message`
    /// falls back to the configured default.
    pub fn request_download(
        &self,
        state: &mut LeadCaptureState,
        email: Option<&str>,
        message: Option<&str>,
    ) -> Result<DownloadGrant, LeadError> {
        let email = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(e) => e.to_string(),
            None => state
                .accepted_email
                .clone()
                .ok_or(LeadError::EmailRequired)?,
        };

        if state.accepted_email.as_deref() == Some(email.as_str()) {
            tracing::debug!("email already accepted this session; skipping form post");
            return Ok(self.grant(email, false));
        }

        if !is_valid_email(&email) {
            return Err(LeadError::InvalidEmail(email));
        }

        let fields = FormFields {
            email: email.clone(),
            message: message.unwrap_or(&self.default_message).to_string(),
        };
        let reply = self.endpoint.submit(&fields)?;
        if !reply.is_success() {
            tracing::warn!("lead form rejected with HTTP {}", reply.status);
            return Err(LeadError::Rejected {
                status: reply.status,
                detail: reply.error_detail(),
            });
        }

        state.accepted_email = Some(email.clone());
        Ok(self.grant(email, true))
    }

    fn grant(&self, email: String, submitted: bool) -> DownloadGrant {
        DownloadGrant {
            email,
            download_url: self.download_url.clone(),
            submitted,
        }
    }
}
