use serde::{Deserialize, Serialize};

/// Caller-side inputs for a payment request.
#[derive(Debug, Clone)]
pub struct RequestPaymentParams {
    /// Whole currency units; the gateway takes no decimals.
    pub amount: f64,
    /// Subscriber's number, local nine-digit or `250`-prefixed.
    pub mobile_phone: String,
    /// Caller-assigned correlation id, unique per logical transaction.
    pub request_transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPaymentResponse {
    #[serde(default, deserialize_with = "crate::response::flag")]
    pub success: bool,
    #[serde(
        default,
        rename = "responsecode",
        deserialize_with = "crate::response::text_opt"
    )]
    pub response_code: Option<String>,
    //Gateway-assigned id, only on accepted requests
    #[serde(
        default,
        rename = "transactionid",
        deserialize_with = "crate::response::text_opt"
    )]
    pub transaction_id: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub status: Option<String>,
    #[serde(
        default,
        rename = "requesttransactionid",
        deserialize_with = "crate::response::text_opt"
    )]
    pub request_transaction_id: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub message: Option<String>,
}
