//! Request parameter and response types, one module per operation.
//!
//! Response fields other than `success` are optional: the backend has
//! drifted over time and absent keys must not fail a decode. Scalar
//! coercion (numeric codes arriving as numbers, 0/1 booleans) happens in
//! the decode helpers the field attributes point at, never here.

pub mod balance;
pub mod deposit;
pub mod payment;
pub mod status;

pub use balance::BalanceResponse;
pub use deposit::{RequestDepositParams, RequestDepositResponse};
pub use payment::{RequestPaymentParams, RequestPaymentResponse};
pub use status::{TransactionStatusParams, TransactionStatusResponse};
