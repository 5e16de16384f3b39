use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(default, deserialize_with = "crate::response::flag")]
    pub success: bool,
    #[serde(
        default,
        rename = "responsecode",
        deserialize_with = "crate::response::text_opt"
    )]
    pub response_code: Option<String>,
    //Arrives as a string or a bare number depending on backend version
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub balance: Option<String>,
    #[serde(default, deserialize_with = "crate::response::text_opt")]
    pub message: Option<String>,
}
