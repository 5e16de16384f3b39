use serde::{Deserialize, Serialize};

/// Identifies the transaction whose outcome is being polled.
#[derive(Debug, Clone)]
pub struct TransactionStatusParams {
    /// The correlation id the caller sent with the original request.
    pub request_transaction_id: String,
    /// The gateway-assigned id returned by that request.
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStatusResponse {
    #[serde(default, deserialize_with = "crate::response::flag")]
    pub success: bool,
    #[serde(
        default,
        rename = "responsecode",
        deserialize_with = "crate::response::text_opt"
    )]
    pub response_code: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub message: Option<String>,
}
