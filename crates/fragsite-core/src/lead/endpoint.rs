//! Third-party form endpoint.

use super::LeadError;
use serde::Deserialize;
use std::time::Duration;

/// Fields posted by the lead-capture form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub message: String,
}

/// Raw endpoint reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReply {
    pub status: u32,
    pub body: String,
}

impl FormReply {
    /// Reply from a finished transfer. A zero status means no HTTP response
    /// arrived at all, which is a transport failure rather than a rejection.
    pub fn from_transfer(status: u32, body: &[u8]) -> Result<Self, LeadError> {
        if status == 0 {
            return Err(LeadError::NoStatus);
        }
        Ok(Self {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Human-readable reason from a JSON error body, if there is one.
    ///
    /// Understands `{"errors":[{"message":..}]}` and `{"error":..}`.
    pub fn error_detail(&self) -> Option<String> {
        #[derive(Deserialize)]
        struct Item {
            message: String,
        }
        #[derive(Deserialize)]
        struct Body {
            #[serde(default)]
            errors: Vec<Item>,
            #[serde(default)]
            error: Option<String>,
        }

        let body: Body = serde_json::from_str(&self.body).ok()?;
        let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
        body.error
    }
}

pub trait FormEndpoint {
    /// Posts the fields once. Only transport failures are `Err`.
    fn submit(&self, fields: &FormFields) -> Result<FormReply, LeadError>;
}

impl<E: FormEndpoint + ?Sized> FormEndpoint for &E {
    fn submit(&self, fields: &FormFields) -> Result<FormReply, LeadError> {
        (**self).submit(fields)
    }
}

/// `multipart/form-data` POST through libcurl, asking for a JSON reply.
#[derive(Debug, Clone)]
pub struct CurlFormEndpoint {
    url: String,
    timeout: Duration,
}

impl CurlFormEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl FormEndpoint for CurlFormEndpoint {
    fn submit(&self, fields: &FormFields) -> Result<FormReply, LeadError> {
        let mut body: Vec<u8> = Vec::new();

        let mut form = curl::easy::Form::new();
        form.part("email").contents(fields.email.as_bytes()).add()?;
        form.part("message").contents(fields.message.as_bytes()).add()?;

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.url)?;
        easy.httppost(form)?;
        easy.follow_location(true)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        // No 100-continue round trip.
        list.append("Expect:")?;
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
        tracing::info!("POST {} -> HTTP {}", self.url, status);
        FormReply::from_transfer(status, &body)
    }
}
