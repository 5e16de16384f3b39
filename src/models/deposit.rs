use serde::{Deserialize, Serialize};

/// Caller-side inputs for pushing money to a subscriber wallet.
#[derive(Debug, Clone)]
pub struct RequestDepositParams {
    /// Whole currency units; the gateway takes no decimals.
    pub amount: f64,
    /// Subscriber's number, local nine-digit or `250`-prefixed.
    pub mobile_phone: String,
    /// Caller-assigned correlation id, unique per logical transaction.
    pub request_transaction_id: String,
    /// Free-text purpose shown on the subscriber's statement.
    pub reason: String,
    /// Whether the withdraw charge is carried by this deposit.
    pub withdraw_charge: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDepositResponse {
    #[serde(default, deserialize_with = "crate::response::flag")]
    pub success: bool,
    #[serde(
        default,
        rename = "responsecode",
        deserialize_with = "crate::response::text_opt"
    )]
    pub response_code: Option<String>,
    #[serde(
        default,
        rename = "requesttransactionid",
        deserialize_with = "crate::response::text_opt"
    )]
    pub request_transaction_id: Option<String>,
    //Settlement reference, only on accepted requests
    #[serde(
        default,
        rename = "referenceid",
        deserialize_with = "crate::response::text_opt"
    )]
    pub reference_id: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub message: Option<String>,
}
