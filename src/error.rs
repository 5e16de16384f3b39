//! Error taxonomy for gateway interactions.

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type IntouchPayResult<T> = Result<T, IntouchPayError>;

/// Everything that can go wrong between building a request and decoding
/// its reply.
///
/// A gateway body carrying `success: false` is not an error. It decodes
/// into the operation's typed response and callers inspect the flag there;
/// only malformed input, network failure, undecodable bodies and non-2xx
/// statuses surface here.
#[derive(Error, Debug)]
pub enum IntouchPayError {
    /// A caller-supplied value was rejected before any network activity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The mobile number matched no known carrier numbering scheme.
    #[error("invalid phone number {number}: {reason}")]
    InvalidPhoneNumber {
        /// The number exactly as the caller supplied it.
        number: String,
        /// Which check failed.
        reason: String,
    },

    /// The bounded exchange expired before the gateway answered.
    #[error("gateway request timed out")]
    Timeout,

    /// Connection, DNS or protocol failure below the HTTP layer.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The gateway answered but the body did not decode.
    #[error("undecodable gateway response (HTTP {status}): {detail}")]
    Decode {
        /// HTTP status of the exchange.
        status: u16,
        /// Raw body, lossily stringified for diagnostics.
        body: String,
        /// What the decoder choked on.
        detail: String,
    },

    /// The gateway answered with a non-2xx status.
    #[error("gateway rejected the request: HTTP {status} {reason}")]
    Gateway {
        /// HTTP status of the exchange.
        status: u16,
        /// Canonical status reason, or `unknown`.
        reason: String,
        /// Decoded body when it was valid JSON.
        body: Option<Value>,
    },
}

impl IntouchPayError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// The crate never retries on its own; this is a hint for callers that
    /// do. Retry by calling the operation again, which signs a fresh
    /// timestamp; a replayed payload falls outside the gateway's
    /// timestamp window. Argument and phone rejections are deterministic
    /// and will fail again unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport(_))
    }

    /// HTTP status attached to the error, when one exists.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } | Self::Gateway { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IntouchPayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e.to_string())
        }
    }
}
