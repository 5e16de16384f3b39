//! Deterministic, time-bound request signing.
//!
//! Every request authenticates with a `password` field: the SHA-256 digest
//! of `username || account_no || partner_secret || timestamp`. The gateway
//! re-derives the digest from the payload's own `timestamp`, so the two
//! values must come from the same signing pass. [`SigningContext`] couples
//! them structurally; builders thread the context, never two loose strings.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::credentials::Credentials;

/// Wire format of the signed timestamp, UTC: `YYYYMMDDhhmmss`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Digest encoding for the `password` field.
///
/// Deployments disagree on this; hex matches the current backend and is
/// the default, base64 is kept for the older variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureEncoding {
    /// Lowercase hex, 64 characters.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
}

/// A timestamp and the signature bound to it.
///
/// Construction is the only way to obtain one, which is what guarantees a
/// payload can never carry a timestamp different from the one that was
/// signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// UTC wall-clock instant in [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Digest of the credential material and `timestamp`.
    pub signature: String,
}

impl SigningContext {
    /// Signs the current UTC instant.
    pub fn generate(credentials: &Credentials, encoding: SignatureEncoding) -> Self {
        Self::at(
            credentials,
            encoding,
            Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        )
    }

    /// Signs a caller-supplied timestamp. The gateway only honours
    /// signatures whose timestamp is close to its own clock, so this is
    /// mostly useful for verification and tests.
    pub fn at(credentials: &Credentials, encoding: SignatureEncoding, timestamp: String) -> Self {
        let signature = sign(
            credentials.username(),
            credentials.account_no(),
            credentials.partner_secret(),
            &timestamp,
            encoding,
        );
        Self {
            timestamp,
            signature,
        }
    }
}

/// SHA-256 over the concatenation `username || account_no ||
/// partner_secret || timestamp`, rendered per `encoding`.
///
/// Pure and deterministic: equal inputs always yield the same output, and
/// any single differing input changes it. Exposed so callers can re-derive
/// signatures, e.g. when checking callback notifications.
pub fn sign(
    username: &str,
    account_no: &str,
    partner_secret: &str,
    timestamp: &str,
    encoding: SignatureEncoding,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(account_no.as_bytes());
    hasher.update(partner_secret.as_bytes());
    hasher.update(timestamp.as_bytes());
    let digest = hasher.finalize();
    match encoding {
        SignatureEncoding::Hex => hex::encode(digest),
        SignatureEncoding::Base64 => BASE64_STANDARD.encode(digest),
    }
}
