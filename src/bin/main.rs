use clap::{Parser, Subcommand};
use intouchpay::{
    ClientConfig, Credentials, IntouchPayClient, RequestDepositParams, RequestPaymentParams,
    ServiceKind, TransactionStatusParams,
};
use serde::Serialize;

/// Command-line driver for the IntouchPay gateway.
///
/// Credentials come from flags or the environment; a .env file in the
/// working directory is honoured.
#[derive(Parser)]
struct Cli {
    /// Partner account user name.
    #[clap(long, env = "INTOUCHPAY_USERNAME")]
    username: String,

    /// Partner account number.
    #[clap(long, env = "INTOUCHPAY_ACCOUNT_NO")]
    account_no: String,

    /// Shared secret the request signatures derive from.
    #[clap(long, env = "INTOUCHPAY_PARTNER_SECRET", hide_env_values = true)]
    partner_secret: String,

    /// URL notified when a pending payment settles.
    #[clap(long, env = "INTOUCHPAY_CALLBACK_URL")]
    callback_url: Option<String>,

    /// Override the production API root, e.g. for a sandbox.
    #[clap(long, env = "INTOUCHPAY_BASE_URL")]
    base_url: Option<String>,

    /// Request bulk handling for deposits.
    #[clap(long)]
    bulk: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the partner account balance.
    Balance,
    /// Ask a subscriber to approve a payment.
    Payment {
        /// Amount in whole currency units.
        #[clap(long)]
        amount: f64,
        /// Subscriber number, local nine-digit or 250-prefixed.
        #[clap(long)]
        phone: String,
        /// Correlation id, unique per logical transaction.
        #[clap(long)]
        transaction_id: String,
    },
    /// Push a deposit out to a subscriber wallet.
    Deposit {
        /// Amount in whole currency units.
        #[clap(long)]
        amount: f64,
        /// Subscriber number, local nine-digit or 250-prefixed.
        #[clap(long)]
        phone: String,
        /// Correlation id, unique per logical transaction.
        #[clap(long)]
        transaction_id: String,
        /// Purpose shown on the subscriber's statement.
        #[clap(long)]
        reason: String,
        /// Carry the withdraw charge on this deposit.
        #[clap(long)]
        withdraw_charge: bool,
    },
    /// Poll the outcome of an earlier payment request.
    Status {
        /// The correlation id sent with the original request.
        #[clap(long)]
        request_transaction_id: String,
        /// The gateway-assigned id from the original response.
        #[clap(long)]
        transaction_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut credentials = Credentials::new(cli.username, cli.account_no, cli.partner_secret);
    if let Some(url) = cli.callback_url {
        credentials = credentials.with_callback_url(url);
    }
    if cli.bulk {
        credentials = credentials.with_service(ServiceKind::Bulk);
    }

    let mut config = ClientConfig::new();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let client = IntouchPayClient::with_config(credentials, config)?;

    let rendered = match cli.command {
        Command::Balance => pretty(&client.get_balance().await?)?,
        Command::Payment {
            amount,
            phone,
            transaction_id,
        } => pretty(
            &client
                .request_payment(&RequestPaymentParams {
                    amount,
                    mobile_phone: phone,
                    request_transaction_id: transaction_id,
                })
                .await?,
        )?,
        Command::Deposit {
            amount,
            phone,
            transaction_id,
            reason,
            withdraw_charge,
        } => pretty(
            &client
                .request_deposit(&RequestDepositParams {
                    amount,
                    mobile_phone: phone,
                    request_transaction_id: transaction_id,
                    reason,
                    withdraw_charge,
                })
                .await?,
        )?,
        Command::Status {
            request_transaction_id,
            transaction_id,
        } => pretty(
            &client
                .get_transaction_status(&TransactionStatusParams {
                    request_transaction_id,
                    transaction_id,
                })
                .await?,
        )?,
    };
    println!("{rendered}");

    Ok(())
}

fn pretty<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
