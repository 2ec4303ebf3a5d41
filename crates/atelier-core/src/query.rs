//! Query handler over the fixture store.
//!
//! Every query is a pure function of the store and its parameters. Stock
//! filters combine with logical AND; absent parameters and the sentinels
//! `"All"` / `"any"` disable their predicate.

use serde::{Deserialize, Serialize};

use crate::{
    AssetClass, BondRecord, BondSummary, DeskError, FixtureStore, Instrument, ServiceBrief,
    StockRecord,
};

/// Sentinel that disables the sector and rating filters.
pub const ALL_SENTINEL: &str = "All";

/// Raw stock-list parameters as they arrive from a caller.
///
/// Numeric bounds stay strings here; [`StockFilter::from_query`] decides
/// whether they are usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockQuery {
    pub search: Option<String>,
    pub sector: Option<String>,
    pub rating: Option<String>,
    pub change: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_cap: Option<String>,
    pub max_cap: Option<String>,
}

/// Direction filter on the daily change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Positive,
    Negative,
    #[default]
    Any,
}

impl ChangeDirection {
    /// `"positive"` and `"negative"` select a direction; anything else is `Any`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("positive") => Self::Positive,
            Some("negative") => Self::Negative,
            _ => Self::Any,
        }
    }

    /// A change of exactly zero is neither positive nor negative.
    pub fn accepts(self, change_percent: f64) -> bool {
        match self {
            Self::Positive => change_percent > 0.0,
            Self::Negative => change_percent < 0.0,
            Self::Any => true,
        }
    }
}

/// Inclusive numeric bounds; a missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn contains(self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// A numeric parameter that was supplied but could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardedBound {
    pub param: &'static str,
    pub raw: String,
}

/// Parsed stock predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFilter {
    search: Option<String>,
    sector: Option<String>,
    rating: Option<String>,
    change: ChangeDirection,
    price: Bounds,
    market_cap: Bounds,
    discarded: Vec<DiscardedBound>,
}

impl StockFilter {
    /// Filter that accepts every stock.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_query(query: &StockQuery) -> Self {
        let mut discarded = Vec::new();
        let mut bound = |param: &'static str, raw: &Option<String>| {
            parse_bound(param, raw.as_deref(), &mut discarded)
        };

        let price = Bounds {
            min: bound("minPrice", &query.min_price),
            max: bound("maxPrice", &query.max_price),
        };
        let market_cap = Bounds {
            min: bound("minCap", &query.min_cap),
            max: bound("maxCap", &query.max_cap),
        };

        Self {
            search: query
                .search
                .as_deref()
                .filter(|search| !search.is_empty())
                .map(str::to_lowercase),
            sector: categorical(query.sector.as_deref()),
            rating: categorical(query.rating.as_deref()),
            change: ChangeDirection::from_param(query.change.as_deref()),
            price,
            market_cap,
            discarded,
        }
    }

    /// True when every active predicate holds for `stock`.
    pub fn accepts(&self, stock: &StockRecord) -> bool {
        if let Some(search) = &self.search {
            if !stock.search_text().to_lowercase().contains(search.as_str()) {
                return false;
            }
        }
        if let Some(sector) = &self.sector {
            if stock.sector != *sector {
                return false;
            }
        }
        if let Some(rating) = &self.rating {
            if stock.rating.as_str() != rating.as_str() {
                return false;
            }
        }

        self.change.accepts(stock.change_percent)
            && self.price.contains(stock.price)
            && self.market_cap.contains(stock.market_cap as f64)
    }

    pub fn price(&self) -> Bounds {
        self.price
    }

    pub fn market_cap(&self) -> Bounds {
        self.market_cap
    }

    /// Numeric parameters ignored because they did not parse.
    pub fn discarded_bounds(&self) -> &[DiscardedBound] {
        &self.discarded
    }
}

/// Result of a stock-list query.
#[derive(Debug, Clone, PartialEq)]
pub struct StockListing {
    pub records: Vec<StockRecord>,
    pub total: usize,
    /// Sectors across the whole store, independent of the filter.
    pub sectors: Vec<String>,
}

/// Result of a bond-list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondListing {
    pub summaries: Vec<BondSummary>,
    pub total: usize,
}

impl FixtureStore {
    pub fn list_stocks(&self, filter: &StockFilter) -> StockListing {
        let records: Vec<StockRecord> = self
            .stocks()
            .iter()
            .filter(|stock| filter.accepts(stock))
            .cloned()
            .collect();

        StockListing {
            total: records.len(),
            records,
            sectors: self.sectors().to_vec(),
        }
    }

    pub fn list_bond_summaries(&self) -> BondListing {
        let summaries: Vec<BondSummary> = self.bonds().iter().map(BondRecord::summary).collect();
        BondListing {
            total: summaries.len(),
            summaries,
        }
    }

    pub fn bond_detail(&self, id: &str) -> Result<BondRecord, DeskError> {
        self.bonds()
            .iter()
            .find(|bond| bond.id == id)
            .cloned()
            .ok_or_else(|| DeskError::not_found("bond", id))
    }

    pub fn brief(&self) -> ServiceBrief {
        self.service_brief().clone()
    }

    /// Unknown or absent keys degrade to an empty list.
    pub fn list_instruments(&self, asset_class: Option<&str>) -> Vec<Instrument> {
        asset_class
            .and_then(AssetClass::from_key)
            .map(|class| self.instruments(class).to_vec())
            .unwrap_or_default()
    }
}

fn categorical(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty() && *value != ALL_SENTINEL)
        .map(str::to_owned)
}

fn parse_bound(
    param: &'static str,
    raw: Option<&str>,
    discarded: &mut Vec<DiscardedBound>,
) -> Option<f64> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            discarded.push(DiscardedBound {
                param,
                raw: raw.to_owned(),
            });
            None
        }
    }
}
