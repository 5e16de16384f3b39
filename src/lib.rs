//! Client for the IntouchPay mobile-money gateway.
//!
//! IntouchPay fronts the Rwandan mobile wallets behind one HTTP API:
//! partners ask subscribers to approve payments, push deposits out to
//! wallets, read their account balance and poll transaction outcomes.
//! Every request authenticates with a deterministic, time-bound signature
//! derived from the partner secret; see [`signature`] for the scheme.
//!
//! ```no_run
//! use intouchpay::{Credentials, IntouchPayClient, RequestPaymentParams};
//!
//! # async fn run() -> intouchpay::IntouchPayResult<()> {
//! let credentials = Credentials::new("partner", "250160000011", "secret")
//!     .with_callback_url("https://partner.example/notify");
//! let client = IntouchPayClient::new(credentials)?;
//!
//! let response = client
//!     .request_payment(&RequestPaymentParams {
//!         amount: 2500.0,
//!         mobile_phone: "0781234567".to_owned(),
//!         request_transaction_id: "order-1042".to_owned(),
//!     })
//!     .await?;
//! if response.success {
//!     // Pending until the subscriber approves; the outcome arrives on
//!     // the callback URL or via get_transaction_status.
//!     println!("accepted: {:?}", response.transaction_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The gateway reports business rejections (wrong PIN, insufficient
//! funds) inside a 2xx body with `success: false`; those decode as `Ok`
//! and callers branch on the flag. Errors are reserved for input the
//! client refuses to send, transport failures and undecodable replies.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod phone;
pub mod request;
pub mod response;
pub mod signature;
pub mod transport;

pub use client::IntouchPayClient;
pub use config::{BodyEncoding, ClientConfig, PhoneField, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use credentials::{Credentials, ServiceKind};
pub use error::{IntouchPayError, IntouchPayResult};
pub use models::{
    BalanceResponse, RequestDepositParams, RequestDepositResponse, RequestPaymentParams,
    RequestPaymentResponse, TransactionStatusParams, TransactionStatusResponse,
};
pub use request::{Endpoint, GatewayRequest, RequestBuilder};
pub use signature::{sign, SignatureEncoding, SigningContext, TIMESTAMP_FORMAT};
pub use transport::{HttpTransport, RawResponse, Transport};
