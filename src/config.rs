//! Per-client deployment constants.

use std::time::Duration;

use crate::signature::SignatureEncoding;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.intouchpay.co.rw/api";

/// Bound on a single request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How request payloads go on the wire. Both carry the same field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// `application/json`.
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
}

/// Field name carrying the subscriber's mobile number.
///
/// Gateway deployments have shipped under both spellings; `mobilephone`
/// is what the current backend reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneField {
    #[default]
    MobilePhone,
    MobilePhoneNo,
}

impl PhoneField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneField::MobilePhone => "mobilephone",
            PhoneField::MobilePhoneNo => "mobilephoneno",
        }
    }
}

/// Knobs fixed at client construction. Requests made through one client
/// all share these; to change them, build a new client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    /// Upper bound on each exchange, connect plus read.
    pub timeout: Duration,
    pub body_encoding: BodyEncoding,
    pub signature_encoding: SignatureEncoding,
    pub phone_field: PhoneField,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            body_encoding: BodyEncoding::default(),
            signature_encoding: SignatureEncoding::default(),
            phone_field: PhoneField::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at a different deployment, e.g. a sandbox.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_body_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.body_encoding = encoding;
        self
    }

    pub fn with_signature_encoding(mut self, encoding: SignatureEncoding) -> Self {
        self.signature_encoding = encoding;
        self
    }

    pub fn with_phone_field(mut self, field: PhoneField) -> Self {
        self.phone_field = field;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.intouchpay.co.rw/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.body_encoding, BodyEncoding::Json);
        assert_eq!(config.signature_encoding, SignatureEncoding::Hex);
        assert_eq!(config.phone_field.as_str(), "mobilephone");
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = ClientConfig::new().with_base_url("https://sandbox.example/api/");
        assert_eq!(config.base_url, "https://sandbox.example/api");
    }
}
