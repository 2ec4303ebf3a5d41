//! Desk source trait and its in-memory implementation.
//!
//! [`DeskSource`] is the seam the CLI and the HTTP binding talk to. It
//! exposes the five desk operations as boxed futures so implementations can
//! be shared as `Arc<dyn DeskSource>`.
//!
//! # Operations
//!
//! | Operation | Input | Output | Failure |
//! |-----------|-------|--------|---------|
//! | [`list_stocks`](DeskSource::list_stocks) | [`StockFilter`] | [`StockListing`] | never |
//! | [`list_bond_summaries`](DeskSource::list_bond_summaries) | none | [`BondListing`] | never |
//! | [`bond_detail`](DeskSource::bond_detail) | bond id | [`BondRecord`] | [`DeskError::NotFound`] |
//! | [`service_brief`](DeskSource::service_brief) | none | [`ServiceBrief`] | never |
//! | [`instruments`](DeskSource::instruments) | asset-class key | `Vec<Instrument>` | never |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    BondListing, BondRecord, FixtureStore, Instrument, ServiceBrief, StockFilter, StockListing,
};

/// Boxed future returned by [`DeskSource`] methods.
pub type DeskFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Desk operation identifier used in logs and CLI metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ListStocks,
    ListBondSummaries,
    GetBondDetail,
    GetServiceBrief,
    ListInstruments,
}

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::ListStocks,
        Self::ListBondSummaries,
        Self::GetBondDetail,
        Self::GetServiceBrief,
        Self::ListInstruments,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListStocks => "list_stocks",
            Self::ListBondSummaries => "list_bond_summaries",
            Self::GetBondDetail => "get_bond_detail",
            Self::GetServiceBrief => "get_service_brief",
            Self::ListInstruments => "list_instruments",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one failure a desk query can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
}

impl DeskError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "desk.not_found",
        }
    }
}

/// Artificial delay applied before every desk result, modelling network
/// latency for the browser front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub const fn delay(self) -> Duration {
        self.delay
    }

    pub fn is_disabled(self) -> bool {
        self.delay.is_zero()
    }

    pub async fn wait(self) {
        if !self.is_disabled() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Desk contract shared by every front-end.
///
/// Implementations must be `Send + Sync`; queries are independent and may
/// run concurrently on separate tasks.
pub trait DeskSource: Send + Sync {
    /// Stocks accepted by every active predicate of `filter`, in store order.
    fn list_stocks<'a>(&'a self, filter: StockFilter) -> DeskFuture<'a, StockListing>;

    /// Every bond projected to its summary, in store order.
    fn list_bond_summaries<'a>(&'a self) -> DeskFuture<'a, BondListing>;

    /// Exact-match lookup by bond id.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when no bond carries `id`.
    fn bond_detail<'a>(&'a self, id: String) -> DeskFuture<'a, Result<BondRecord, DeskError>>;

    fn service_brief<'a>(&'a self) -> DeskFuture<'a, ServiceBrief>;

    /// Instruments for an asset-class key; unknown or absent keys give an
    /// empty list.
    fn instruments<'a>(&'a self, asset_class: Option<String>) -> DeskFuture<'a, Vec<Instrument>>;
}

/// [`DeskSource`] answering from a shared [`FixtureStore`].
#[derive(Debug, Clone)]
pub struct MockDesk {
    store: Arc<FixtureStore>,
    latency: SimulatedLatency,
}

impl MockDesk {
    pub fn new(store: Arc<FixtureStore>) -> Self {
        Self {
            store,
            latency: SimulatedLatency::disabled(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }
}

impl DeskSource for MockDesk {
    fn list_stocks<'a>(&'a self, filter: StockFilter) -> DeskFuture<'a, StockListing> {
        Box::pin(async move {
            self.latency.wait().await;
            let listing = self.store.list_stocks(&filter);
            tracing::debug!(
                operation = %Operation::ListStocks,
                matched = listing.total,
                of = self.store.stocks().len(),
                discarded = filter.discarded_bounds().len(),
                "stocks filtered"
            );
            listing
        })
    }

    fn list_bond_summaries<'a>(&'a self) -> DeskFuture<'a, BondListing> {
        Box::pin(async move {
            self.latency.wait().await;
            let listing = self.store.list_bond_summaries();
            tracing::debug!(operation = %Operation::ListBondSummaries, total = listing.total);
            listing
        })
    }

    fn bond_detail<'a>(&'a self, id: String) -> DeskFuture<'a, Result<BondRecord, DeskError>> {
        Box::pin(async move {
            self.latency.wait().await;
            let result = self.store.bond_detail(&id);
            tracing::debug!(
                operation = %Operation::GetBondDetail,
                id = %id,
                found = result.is_ok()
            );
            result
        })
    }

    fn service_brief<'a>(&'a self) -> DeskFuture<'a, ServiceBrief> {
        Box::pin(async move {
            self.latency.wait().await;
            self.store.brief()
        })
    }

    fn instruments<'a>(&'a self, asset_class: Option<String>) -> DeskFuture<'a, Vec<Instrument>> {
        Box::pin(async move {
            self.latency.wait().await;
            let instruments = self.store.list_instruments(asset_class.as_deref());
            tracing::debug!(
                operation = %Operation::ListInstruments,
                asset_class = asset_class.as_deref().unwrap_or("<none>"),
                count = instruments.len()
            );
            instruments
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> MockDesk {
        MockDesk::new(Arc::new(FixtureStore::bundled().expect("bundled fixtures")))
    }

    #[test]
    fn not_found_carries_code_and_message() {
        let err = DeskError::not_found("bond", "bond-999");
        assert_eq!(err.code(), "desk.not_found");
        assert_eq!(err.to_string(), "bond 'bond-999' not found");
    }

    #[test]
    fn latency_defaults_to_disabled() {
        assert!(SimulatedLatency::default().is_disabled());
        assert!(desk().latency().is_disabled());
        assert_eq!(
            SimulatedLatency::from_millis(250).delay(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn operation_names_are_snake_case() {
        let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(
            names,
            [
                "list_stocks",
                "list_bond_summaries",
                "get_bond_detail",
                "get_service_brief",
                "list_instruments",
            ]
        );
        assert_eq!(
            serde_json::to_string(&Operation::GetBondDetail).expect("serializes"),
            "\"get_bond_detail\""
        );
    }

    #[tokio::test]
    async fn desk_is_usable_as_trait_object() {
        let source: Arc<dyn DeskSource> = Arc::new(desk());
        let listing = source.list_bond_summaries().await;
        assert_eq!(listing.total, 8);

        let err = source
            .bond_detail(String::from("BOND-003"))
            .await
            .expect_err("ids are case-sensitive");
        assert!(matches!(err, DeskError::NotFound { entity: "bond", .. }));
    }
}
