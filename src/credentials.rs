//! Partner account material held for the lifetime of a client.

use std::fmt;

/// Gateway-side handling requested for deposits, carried as the `sid`
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// Ordinary one-off deposits.
    #[default]
    Standard,
    /// Bulk payment handling.
    Bulk,
}

impl ServiceKind {
    /// Wire value of the `sid` field.
    pub fn sid(&self) -> u8 {
        match self {
            ServiceKind::Standard => 0,
            ServiceKind::Bulk => 1,
        }
    }
}

/// Account material every request draws on.
///
/// The partner secret never leaves the process; only the signature derived
/// from it is transmitted. Values are fixed at construction, so one
/// `Credentials` can back any number of concurrent requests.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    account_no: String,
    partner_secret: String,
    callback_url: Option<String>,
    service: ServiceKind,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        account_no: impl Into<String>,
        partner_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            account_no: account_no.into(),
            partner_secret: partner_secret.into(),
            callback_url: None,
            service: ServiceKind::Standard,
        }
    }

    /// URL the gateway notifies once a pending payment settles. An empty
    /// string counts as unset and the field stays out of payloads.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.callback_url = if url.is_empty() { None } else { Some(url) };
        self
    }

    pub fn with_service(mut self, service: ServiceKind) -> Self {
        self.service = service;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn account_no(&self) -> &str {
        &self.account_no
    }

    pub(crate) fn partner_secret(&self) -> &str {
        &self.partner_secret
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }
}

// Keeps the secret out of logs and panic payloads.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("account_no", &self.account_no)
            .field("partner_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .field("service", &self.service)
            .finish()
    }
}
