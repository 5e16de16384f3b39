//! Canonical payload assembly, one entry point per gateway operation.
//!
//! Builders validate caller input, sign exactly once, and lay the result
//! out as a flat field map. The map is transport-agnostic; encoding to
//! JSON or form bytes happens on the finished [`GatewayRequest`].

use reqwest::Method;
use serde_json::{Map, Value};
use urlencoding::encode;

use crate::config::{BodyEncoding, ClientConfig};
use crate::credentials::Credentials;
use crate::error::{IntouchPayError, IntouchPayResult};
use crate::models::{
    RequestDepositParams, RequestPaymentParams, TransactionStatusParams,
};
use crate::phone;
use crate::signature::SigningContext;

/// Gateway operations and their fixed paths under the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Payment,
    Deposit,
    Balance,
    TransactionStatus,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Payment => "/requestpayment/",
            Endpoint::Deposit => "/requestdeposit/",
            Endpoint::Balance => "/getbalance/",
            Endpoint::TransactionStatus => "/gettransactionstatus/",
        }
    }
}

/// A fully-built request, ready for any transport.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub endpoint: Endpoint,
    pub method: Method,
    /// Flat field map; values are strings and integers only.
    pub fields: Map<String, Value>,
    pub encoding: BodyEncoding,
}

impl GatewayRequest {
    /// Body bytes per the configured encoding.
    pub fn body(&self) -> IntouchPayResult<Vec<u8>> {
        match self.encoding {
            BodyEncoding::Json => serde_json::to_vec(&self.fields)
                .map_err(|e| IntouchPayError::InvalidArgument(format!("unencodable payload: {e}"))),
            BodyEncoding::Form => Ok(form_encode(&self.fields).into_bytes()),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self.encoding {
            BodyEncoding::Json => "application/json",
            BodyEncoding::Form => "application/x-www-form-urlencoded",
        }
    }
}

fn form_encode(fields: &Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(&scalar_text(value))))
        .collect::<Vec<_>>()
        .join("&")
}

// Number fields render without quotes, string fields without escaping.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Assembles per-operation payloads from one credential set and one
/// config.
///
/// Each build signs a fresh timestamp and threads the one
/// [`SigningContext`] into both the `timestamp` and `password` fields, so
/// the two can never drift apart. All input validation happens here,
/// before any network activity.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    config: &'a ClientConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials, config: &'a ClientConfig) -> Self {
        Self {
            credentials,
            config,
        }
    }

    /// Payload for a customer-approved payment (wallet to partner).
    pub fn payment(&self, params: &RequestPaymentParams) -> IntouchPayResult<GatewayRequest> {
        let amount = canonical_amount(params.amount)?;
        let msisdn = self.canonical_msisdn(&params.mobile_phone)?;
        let mut fields = self.signed_base();
        fields.insert("amount".to_owned(), amount.into());
        fields.insert(
            self.config.phone_field.as_str().to_owned(),
            Value::String(msisdn),
        );
        fields.insert(
            "requesttransactionid".to_owned(),
            Value::String(params.request_transaction_id.clone()),
        );
        fields.insert(
            "accountno".to_owned(),
            Value::String(self.credentials.account_no().to_owned()),
        );
        if let Some(url) = self.credentials.callback_url() {
            fields.insert("callbackurl".to_owned(), Value::String(url.to_owned()));
        }
        Ok(self.finish(Endpoint::Payment, fields))
    }

    /// Payload for pushing money to a subscriber wallet.
    pub fn deposit(&self, params: &RequestDepositParams) -> IntouchPayResult<GatewayRequest> {
        let amount = canonical_amount(params.amount)?;
        let msisdn = self.canonical_msisdn(&params.mobile_phone)?;
        let mut fields = self.signed_base();
        fields.insert("amount".to_owned(), amount.into());
        fields.insert(
            "withdrawcharge".to_owned(),
            u8::from(params.withdraw_charge).into(),
        );
        fields.insert("reason".to_owned(), Value::String(params.reason.clone()));
        fields.insert("sid".to_owned(), self.credentials.service().sid().into());
        fields.insert(
            self.config.phone_field.as_str().to_owned(),
            Value::String(msisdn),
        );
        fields.insert(
            "requesttransactionid".to_owned(),
            Value::String(params.request_transaction_id.clone()),
        );
        fields.insert(
            "accountno".to_owned(),
            Value::String(self.credentials.account_no().to_owned()),
        );
        Ok(self.finish(Endpoint::Deposit, fields))
    }

    /// Payload for querying the partner account balance.
    pub fn balance(&self) -> IntouchPayResult<GatewayRequest> {
        let mut fields = self.signed_base();
        fields.insert(
            "accountno".to_owned(),
            Value::String(self.credentials.account_no().to_owned()),
        );
        Ok(self.finish(Endpoint::Balance, fields))
    }

    /// Payload for polling the outcome of an earlier transaction.
    pub fn transaction_status(
        &self,
        params: &TransactionStatusParams,
    ) -> IntouchPayResult<GatewayRequest> {
        let mut fields = self.signed_base();
        fields.insert(
            "requesttransactionid".to_owned(),
            Value::String(params.request_transaction_id.clone()),
        );
        fields.insert(
            "transactionid".to_owned(),
            Value::String(params.transaction_id.clone()),
        );
        Ok(self.finish(Endpoint::TransactionStatus, fields))
    }

    // username + timestamp + password, common to every operation. The
    // timestamp placed here is the one that was signed.
    fn signed_base(&self) -> Map<String, Value> {
        let ctx = SigningContext::generate(self.credentials, self.config.signature_encoding);
        let mut fields = Map::new();
        fields.insert(
            "username".to_owned(),
            Value::String(self.credentials.username().to_owned()),
        );
        fields.insert("timestamp".to_owned(), Value::String(ctx.timestamp));
        fields.insert("password".to_owned(), Value::String(ctx.signature));
        fields
    }

    fn finish(&self, endpoint: Endpoint, fields: Map<String, Value>) -> GatewayRequest {
        GatewayRequest {
            endpoint,
            method: Method::POST,
            fields,
            encoding: self.config.body_encoding,
        }
    }

    fn canonical_msisdn(&self, raw: &str) -> IntouchPayResult<String> {
        let unplussed = raw.strip_prefix('+').unwrap_or(raw);
        if unplussed.len() > phone::COUNTRY_PREFIX.len()
            && unplussed.starts_with(phone::COUNTRY_PREFIX)
            && unplussed.bytes().all(|b| b.is_ascii_digit())
        {
            return Ok(unplussed.to_owned());
        }
        let local = unplussed.strip_prefix('0').unwrap_or(unplussed);
        if phone::carrier_of(local).is_some() {
            Ok(format!("{}{}", phone::COUNTRY_PREFIX, local))
        } else {
            Err(IntouchPayError::InvalidPhoneNumber {
                number: raw.to_owned(),
                reason: "matches neither the MTN (78/79) nor Airtel (72/73) nine-digit scheme"
                    .to_owned(),
            })
        }
    }
}

fn canonical_amount(amount: f64) -> IntouchPayResult<u64> {
    if !amount.is_finite() {
        return Err(IntouchPayError::InvalidArgument(format!(
            "amount {amount} is not a finite number"
        )));
    }
    if amount < 0.0 {
        return Err(IntouchPayError::InvalidArgument(format!(
            "amount {amount} is negative"
        )));
    }
    if amount.fract() != 0.0 {
        return Err(IntouchPayError::InvalidArgument(format!(
            "amount {amount} has a fractional part; the gateway takes whole units only"
        )));
    }
    if amount > u64::MAX as f64 {
        return Err(IntouchPayError::InvalidArgument(format!(
            "amount {amount} is out of range"
        )));
    }
    Ok(amount as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhoneField;
    use crate::credentials::ServiceKind;
    use crate::signature::{sign, SignatureEncoding};

    fn creds() -> Credentials {
        Credentials::new("testuser", "250160000011", "s3cr3t")
    }

    fn build(credentials: &Credentials, config: &ClientConfig) -> GatewayRequest {
        RequestBuilder::new(credentials, config)
            .payment(&RequestPaymentParams {
                amount: 2500.0,
                mobile_phone: "0781234567".to_owned(),
                request_transaction_id: "tx-001".to_owned(),
            })
            .unwrap()
    }

    fn text<'a>(request: &'a GatewayRequest, key: &str) -> &'a str {
        request.fields[key].as_str().unwrap_or_else(|| panic!("missing {key}"))
    }

    #[test]
    fn test_payment_payload_fields() {
        let credentials = creds().with_callback_url("https://partner.example/notify");
        let config = ClientConfig::default();
        let request = build(&credentials, &config);

        assert_eq!(request.endpoint, Endpoint::Payment);
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.fields.len(), 8);
        assert_eq!(text(&request, "username"), "testuser");
        assert_eq!(text(&request, "accountno"), "250160000011");
        assert_eq!(text(&request, "mobilephone"), "250781234567");
        assert_eq!(text(&request, "requesttransactionid"), "tx-001");
        assert_eq!(text(&request, "callbackurl"), "https://partner.example/notify");
        assert_eq!(request.fields["amount"], Value::from(2500u64));
    }

    #[test]
    fn test_unset_callback_url_is_omitted() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = build(&credentials, &config);
        assert!(!request.fields.contains_key("callbackurl"));
        assert_eq!(request.fields.len(), 7);
    }

    #[test]
    fn test_password_signs_the_payload_timestamp() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = build(&credentials, &config);

        let timestamp = text(&request, "timestamp");
        assert_eq!(timestamp.len(), 14);
        assert_eq!(
            text(&request, "password"),
            sign(
                "testuser",
                "250160000011",
                "s3cr3t",
                timestamp,
                SignatureEncoding::Hex,
            )
        );
    }

    #[test]
    fn test_base64_signature_encoding_is_honoured() {
        let credentials = creds();
        let config = ClientConfig::new().with_signature_encoding(SignatureEncoding::Base64);
        let request = build(&credentials, &config);
        let timestamp = text(&request, "timestamp").to_owned();
        assert_eq!(
            text(&request, "password"),
            sign(
                "testuser",
                "250160000011",
                "s3cr3t",
                &timestamp,
                SignatureEncoding::Base64,
            )
        );
    }

    #[test]
    fn test_deposit_payload_fields() {
        let credentials = creds().with_service(ServiceKind::Bulk);
        let config = ClientConfig::default();
        let request = RequestBuilder::new(&credentials, &config)
            .deposit(&RequestDepositParams {
                amount: 1000.0,
                mobile_phone: "721234567".to_owned(),
                request_transaction_id: "tx-002".to_owned(),
                reason: "school fees".to_owned(),
                withdraw_charge: true,
            })
            .unwrap();

        assert_eq!(request.endpoint, Endpoint::Deposit);
        assert_eq!(request.fields.len(), 10);
        assert_eq!(request.fields["amount"], Value::from(1000u64));
        assert_eq!(request.fields["withdrawcharge"], Value::from(1u64));
        assert_eq!(request.fields["sid"], Value::from(1u64));
        assert_eq!(text(&request, "reason"), "school fees");
        assert_eq!(text(&request, "mobilephone"), "250721234567");
        assert!(!request.fields.contains_key("callbackurl"));
    }

    #[test]
    fn test_deposit_defaults_standard_service_without_charge() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = RequestBuilder::new(&credentials, &config)
            .deposit(&RequestDepositParams {
                amount: 1000.0,
                mobile_phone: "0781234567".to_owned(),
                request_transaction_id: "tx-003".to_owned(),
                reason: "refund".to_owned(),
                withdraw_charge: false,
            })
            .unwrap();
        assert_eq!(request.fields["withdrawcharge"], Value::from(0u64));
        assert_eq!(request.fields["sid"], Value::from(0u64));
    }

    #[test]
    fn test_balance_payload_is_minimal() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = RequestBuilder::new(&credentials, &config).balance().unwrap();

        assert_eq!(request.endpoint, Endpoint::Balance);
        let keys: Vec<&str> = request.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["accountno", "password", "timestamp", "username"]);
    }

    #[test]
    fn test_status_payload_fields() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = RequestBuilder::new(&credentials, &config)
            .transaction_status(&TransactionStatusParams {
                request_transaction_id: "tx-001".to_owned(),
                transaction_id: "715113815".to_owned(),
            })
            .unwrap();

        assert_eq!(request.endpoint, Endpoint::TransactionStatus);
        assert_eq!(text(&request, "requesttransactionid"), "tx-001");
        assert_eq!(text(&request, "transactionid"), "715113815");
        assert!(!request.fields.contains_key("accountno"));
        assert_eq!(request.fields.len(), 5);
    }

    #[test]
    fn test_amount_must_be_integral_and_non_negative() {
        let credentials = creds();
        let config = ClientConfig::default();
        let builder = RequestBuilder::new(&credentials, &config);
        let attempt = |amount: f64| {
            builder.payment(&RequestPaymentParams {
                amount,
                mobile_phone: "0781234567".to_owned(),
                request_transaction_id: "tx".to_owned(),
            })
        };

        assert!(matches!(
            attempt(-1.0).unwrap_err(),
            IntouchPayError::InvalidArgument(_)
        ));
        assert!(matches!(
            attempt(10.5).unwrap_err(),
            IntouchPayError::InvalidArgument(_)
        ));
        assert!(matches!(
            attempt(f64::NAN).unwrap_err(),
            IntouchPayError::InvalidArgument(_)
        ));
        // Zero is for the gateway to refuse, not the client.
        assert_eq!(attempt(0.0).unwrap().fields["amount"], Value::from(0u64));
    }

    #[test]
    fn test_phone_normalisation_shapes() {
        let credentials = creds();
        let config = ClientConfig::default();
        let builder = RequestBuilder::new(&credentials, &config);
        let normalise = |raw: &str| {
            builder
                .payment(&RequestPaymentParams {
                    amount: 100.0,
                    mobile_phone: raw.to_owned(),
                    request_transaction_id: "tx".to_owned(),
                })
                .map(|request| request.fields["mobilephone"].as_str().unwrap().to_owned())
        };

        assert_eq!(normalise("0781234567").unwrap(), "250781234567");
        assert_eq!(normalise("781234567").unwrap(), "250781234567");
        assert_eq!(normalise("791234567").unwrap(), "250791234567");
        assert_eq!(normalise("0731234567").unwrap(), "250731234567");
        assert_eq!(normalise("250781234567").unwrap(), "250781234567");
        assert_eq!(normalise("+250781234567").unwrap(), "250781234567");

        for bad in ["12345", "0751234567", "78123456", "78123456a", ""] {
            assert!(
                matches!(
                    normalise(bad).unwrap_err(),
                    IntouchPayError::InvalidPhoneNumber { .. }
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_field_name_is_configurable() {
        let credentials = creds();
        let config = ClientConfig::new().with_phone_field(PhoneField::MobilePhoneNo);
        let request = build(&credentials, &config);
        assert_eq!(text(&request, "mobilephoneno"), "250781234567");
        assert!(!request.fields.contains_key("mobilephone"));
    }

    #[test]
    fn test_json_body_round_trips() {
        let credentials = creds();
        let config = ClientConfig::default();
        let request = build(&credentials, &config);
        assert_eq!(request.content_type(), "application/json");

        let parsed: Value = serde_json::from_slice(&request.body().unwrap()).unwrap();
        assert_eq!(parsed["username"], "testuser");
        assert_eq!(parsed["amount"], 2500);
    }

    #[test]
    fn test_form_body_escapes_values() {
        let credentials = creds();
        let config = ClientConfig::new().with_body_encoding(BodyEncoding::Form);
        let request = RequestBuilder::new(&credentials, &config)
            .deposit(&RequestDepositParams {
                amount: 1000.0,
                mobile_phone: "0781234567".to_owned(),
                request_transaction_id: "tx 004".to_owned(),
                reason: "school fees & books".to_owned(),
                withdraw_charge: false,
            })
            .unwrap();

        assert_eq!(request.content_type(), "application/x-www-form-urlencoded");
        let body = String::from_utf8(request.body().unwrap()).unwrap();
        assert!(body.contains("username=testuser"));
        assert!(body.contains("amount=1000"));
        assert!(body.contains("reason=school%20fees%20%26%20books"));
        assert!(body.contains("requesttransactionid=tx%20004"));
        assert!(!body.contains(' '));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Payment.path(), "/requestpayment/");
        assert_eq!(Endpoint::Deposit.path(), "/requestdeposit/");
        assert_eq!(Endpoint::Balance.path(), "/getbalance/");
        assert_eq!(Endpoint::TransactionStatus.path(), "/gettransactionstatus/");
    }
}
