//! # coinm-cli
//!
//! Command-line front end for the COIN-M futures REST client.
//!
//! Runs a single request and prints the decoded response as pretty JSON on
//! stdout. Logs go to stderr (and optionally a daily log file).
//!
//! # Usage
//!
//! ```bash
//! coinm-cli book-ticker --pair BTCUSD
//! coinm-cli --testnet --config coinm.json positions
//! BINANCE_API_KEY=... BINANCE_API_SECRET=... coinm-cli balance
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coinm_core::logging::LogConfig;
use coinm_core::types::{OrderBookParams, SymbolOrPair, SymbolParam};
use coinm_rest::{CoinMClient, RestClientOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Binance COIN-M futures REST client.
#[derive(Parser)]
#[command(name = "coinm-cli", about = "Binance COIN-M futures REST client")]
struct Cli {
    /// Configuration file path (JSON).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Optional log directory for file output.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Use the testnet deployment.
    #[arg(long, global = true)]
    testnet: bool,

    /// API key. Overrides the config file.
    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API secret. Overrides the config file.
    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true, global = true)]
    api_secret: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exchange server time.
    Time,
    /// Best bid/ask for a symbol, a pair, or every symbol.
    BookTicker {
        #[arg(long, conflicts_with = "pair")]
        symbol: Option<String>,
        #[arg(long)]
        pair: Option<String>,
    },
    /// Order book snapshot.
    Depth {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Open interest of a symbol.
    OpenInterest {
        #[arg(long)]
        symbol: String,
    },
    /// Current positions (signed).
    Positions,
    /// Account balances (signed).
    Balance,
    /// Open orders (signed).
    OpenOrders {
        #[arg(long)]
        symbol: Option<String>,
    },
}

impl Command {
    fn is_signed(&self) -> bool {
        matches!(self, Command::Positions | Command::Balance | Command::OpenOrders { .. })
    }
}

/// Config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CliConfig {
    log: LogConfig,
    client: RestClientOptions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut config: CliConfig = match &cli.config {
        Some(path) => coinm_core::config::load_config(path)?,
        None => CliConfig::default(),
    };

    // 2. Initialize logging
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log.level.clone());
    let log_dir = cli.log_dir.clone().or_else(|| config.log.dir.clone());
    coinm_core::logging::init_logging(&log_level, log_dir.as_deref(), "coinm-cli");

    // 3. Build the client
    if cli.testnet {
        config.client.use_testnet = true;
    }
    if let Some(key) = cli.api_key.clone() {
        config.client.api_key = Some(key);
    }
    if let Some(secret) = cli.api_secret.clone() {
        config.client.api_secret = Some(secret);
    }
    let options = config.client;
    info!("coinm-cli starting, category={}, base_url={}", options.category(), options.effective_base_url());

    let client = CoinMClient::new(options).context("failed to build REST client")?;
    if cli.command.is_signed() {
        let offset = client.sync_time().await.context("server time sync failed")?;
        debug!("server clock offset {offset} ms");
    }

    // 4. Run the command
    match cli.command {
        Command::Time => print_json(&client.get_server_time().await?),
        Command::BookTicker { symbol, pair } => {
            let filter = SymbolOrPair { symbol, pair };
            print_json(&client.get_symbol_order_book_ticker(&filter).await?)
        }
        Command::Depth { symbol, limit } => {
            print_json(&client.get_order_book(&OrderBookParams { symbol, limit }).await?)
        }
        Command::OpenInterest { symbol } => {
            print_json(&client.get_open_interest(&SymbolParam::new(symbol)).await?)
        }
        Command::Positions => print_json(&client.get_positions().await?),
        Command::Balance => print_json(&client.get_balance().await?),
        Command::OpenOrders { symbol } => {
            let filter = SymbolOrPair { symbol, pair: None };
            print_json(&client.get_all_open_orders(&filter).await?)
        }
    }?;

    let limits = client.rate_limits();
    debug!(used_weight = ?limits.used_weight_1m, order_count = ?limits.order_count_1m, "rate limits");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("failed to render response")?);
    Ok(())
}
