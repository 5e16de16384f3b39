//! High-level client facade over the four gateway operations.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::IntouchPayResult;
use crate::models::{
    BalanceResponse, RequestDepositParams, RequestDepositResponse, RequestPaymentParams,
    RequestPaymentResponse, TransactionStatusParams, TransactionStatusResponse,
};
use crate::request::{GatewayRequest, RequestBuilder};
use crate::response;
use crate::transport::{HttpTransport, Transport};

/// IntouchPay gateway client.
///
/// Holds one credential set and one configuration for its whole lifetime.
/// Methods take `&self` and keep no per-call state, so a single client can
/// serve concurrent callers; clone it freely, the underlying HTTP client
/// is shared.
///
/// Every method resolves with the operation's typed response, including
/// replies where the gateway set `success: false`. Errors are reserved for
/// rejected input, transport failures, undecodable bodies and non-2xx
/// statuses.
#[derive(Debug, Clone)]
pub struct IntouchPayClient<T: Transport = HttpTransport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
}

impl IntouchPayClient<HttpTransport> {
    /// Production client with default configuration.
    pub fn new(credentials: Credentials) -> IntouchPayResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Production client with explicit configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> IntouchPayResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            credentials,
            config,
            transport,
        })
    }
}

impl<T: Transport> IntouchPayClient<T> {
    /// Client over a caller-supplied transport. This is the seam tests use
    /// to script gateway behaviour.
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Asks the subscriber to approve a payment to the partner account.
    ///
    /// An accepted request is only *pending*; the final outcome arrives on
    /// the callback URL or via [`get_transaction_status`].
    ///
    /// [`get_transaction_status`]: Self::get_transaction_status
    pub async fn request_payment(
        &self,
        params: &RequestPaymentParams,
    ) -> IntouchPayResult<RequestPaymentResponse> {
        debug!(
            request_transaction_id = %params.request_transaction_id,
            "requesting payment"
        );
        let request = self.builder().payment(params)?;
        self.perform(request).await
    }

    /// Pushes money from the partner account to a subscriber wallet.
    pub async fn request_deposit(
        &self,
        params: &RequestDepositParams,
    ) -> IntouchPayResult<RequestDepositResponse> {
        debug!(
            request_transaction_id = %params.request_transaction_id,
            "requesting deposit"
        );
        let request = self.builder().deposit(params)?;
        self.perform(request).await
    }

    /// Reads the partner account balance.
    pub async fn get_balance(&self) -> IntouchPayResult<BalanceResponse> {
        let request = self.builder().balance()?;
        self.perform(request).await
    }

    /// Polls the outcome of an earlier payment request.
    pub async fn get_transaction_status(
        &self,
        params: &TransactionStatusParams,
    ) -> IntouchPayResult<TransactionStatusResponse> {
        let request = self.builder().transaction_status(params)?;
        self.perform(request).await
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.credentials, &self.config)
    }

    async fn perform<R: DeserializeOwned>(&self, request: GatewayRequest) -> IntouchPayResult<R> {
        let raw = self.transport.exchange(&request).await?;
        response::decode(&raw)
    }
}
