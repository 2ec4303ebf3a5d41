use serde::{Deserialize, Serialize};

use crate::{BondListing, BondSummary, StockListing, StockRecord};

/// Wire envelope for desk responses: `{data, meta?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T, M = ()> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<T, M> Envelope<T, M> {
    pub fn with_meta(data: T, meta: M) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

impl<T> Envelope<T> {
    /// Envelope without metadata (single-record and pick-list responses).
    pub fn bare(data: T) -> Self {
        Self { data, meta: None }
    }
}

/// Metadata of a stock listing. `sectors` is store-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockListMeta {
    pub total: usize,
    pub sectors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMeta {
    pub total: usize,
}

impl From<StockListing> for Envelope<Vec<StockRecord>, StockListMeta> {
    fn from(listing: StockListing) -> Self {
        Self::with_meta(
            listing.records,
            StockListMeta {
                total: listing.total,
                sectors: listing.sectors,
            },
        )
    }
}

impl From<BondListing> for Envelope<Vec<BondSummary>, CountMeta> {
    fn from(listing: BondListing) -> Self {
        Self::with_meta(
            listing.summaries,
            CountMeta {
                total: listing.total,
            },
        )
    }
}
