//! # Atelier Core
//!
//! Fixture store, query handler and desk contracts for the atelier mock
//! wealth-management back-end.
//!
//! ## Overview
//!
//! - **Typed records** for stocks, bonds, the service brief and instruments
//! - **Fixture store** loaded once from bundled or on-disk JSON documents
//! - **Query handler** with conjunctive stock filtering
//! - **Desk source trait** shared by the CLI and the HTTP binding
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Desk configuration from environment and overrides |
//! | [`desk`] | `DeskSource` trait, `MockDesk` and simulated latency |
//! | [`domain`] | Domain records, tickers and dates |
//! | [`envelope`] | `{data, meta}` wire envelope |
//! | [`error`] | Core error types |
//! | [`fixtures`] | Immutable fixture store |
//! | [`query`] | Stock filters and query operations |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use atelier_core::{DeskConfig, DeskSource, StockFilter, StockQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let desk = DeskConfig::default().open()?;
//!
//!     let query = StockQuery {
//!         sector: Some(String::from("Energy")),
//!         ..StockQuery::default()
//!     };
//!     let listing = desk.list_stocks(StockFilter::from_query(&query)).await;
//!     println!("{} energy stocks", listing.total);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod desk;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod query;

pub use config::DeskConfig;
pub use desk::{DeskError, DeskFuture, DeskSource, MockDesk, Operation, SimulatedLatency};
pub use domain::{
    AssetClass, BondRating, BondRecord, BondSummary, Currency, Instrument, IsoDate, ServiceBrief,
    StockRating, StockRecord, Ticker, UtcDateTime,
};
pub use envelope::{CountMeta, Envelope, StockListMeta};
pub use error::CoreError;
pub use fixtures::FixtureStore;
pub use query::{
    BondListing, Bounds, ChangeDirection, DiscardedBound, StockFilter, StockListing, StockQuery,
    ALL_SENTINEL,
};
