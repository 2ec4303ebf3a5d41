//! CLI argument definitions for atelier.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stocks` | Filtered stock watchlist |
//! | `bonds` | Bond summaries |
//! | `bond <ID>` | Full record for one bond |
//! | `brief` | Client service brief |
//! | `instruments [CLASS]` | Instrument pick-list for an asset class |
//! | `serve` | Run the HTTP desk |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--latency-ms` | `ATELIER_LATENCY_MS` or `0` | Simulated desk latency |
//! | `--fixtures` | `ATELIER_FIXTURES` or bundled | Fixture directory |
//!
//! # Examples
//!
//! ```bash
//! atelier stocks --sector Energy --change positive --format table
//! atelier bond bond-003 --pretty
//! atelier instruments fixed-income --format table
//! atelier serve --port 9000 --latency-ms 300
//! ```

use std::path::PathBuf;

use atelier_core::StockQuery;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Mock wealth-management desk: watchlist, bond dossier and onboarding data.
#[derive(Debug, Parser)]
#[command(name = "atelier", author, version, about)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: Metadata line followed by one line per record
    /// - table: Aligned text table
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Simulated latency applied to every desk query.
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Directory holding replacement fixture documents.
    #[arg(long, global = true, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List watchlist stocks matching every supplied filter.
    ///
    ///   atelier stocks --search zend
    ///   atelier stocks --sector Energy --change negative
    ///   atelier stocks --min-price 50 --max-cap 20000000000
    Stocks(StocksArgs),

    /// List bond summaries.
    Bonds,

    /// Show the full record of one bond.
    Bond(BondArgs),

    /// Show the client service brief.
    Brief,

    /// List instruments offered for an asset class.
    ///
    /// Known classes: equities, fixed-income, alternatives, multi-asset.
    Instruments(InstrumentsArgs),

    /// Serve the desk over HTTP.
    Serve(ServeArgs),
}

/// Stock filters. Numeric bounds are taken as text; values that do not
/// parse are ignored and reported as warnings.
#[derive(Debug, Default, Args)]
pub struct StocksArgs {
    /// Case-insensitive substring of "TICKER Company".
    #[arg(long)]
    pub search: Option<String>,

    /// Exact sector; "All" disables the filter.
    #[arg(long)]
    pub sector: Option<String>,

    /// Exact rating (Buy, Hold, Sell); "All" disables the filter.
    #[arg(long)]
    pub rating: Option<String>,

    /// Daily change direction: positive, negative or any.
    #[arg(long)]
    pub change: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_price: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_cap: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_cap: Option<String>,
}

impl StocksArgs {
    pub fn to_query(&self) -> StockQuery {
        StockQuery {
            search: self.search.clone(),
            sector: self.sector.clone(),
            rating: self.rating.clone(),
            change: self.change.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            min_cap: self.min_cap.clone(),
            max_cap: self.max_cap.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct BondArgs {
    /// Bond identifier, e.g. bond-003.
    pub id: String,
}

#[derive(Debug, Args)]
pub struct InstrumentsArgs {
    /// Asset-class key. Omitted or unknown keys give an empty list.
    pub asset_class: Option<String>,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen host (overrides ATELIER_HOST).
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides ATELIER_PORT).
    #[arg(long)]
    pub port: Option<u16>,
}
