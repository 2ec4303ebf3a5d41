use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{IsoDate, Ticker, UtcDateTime};

/// Analyst rating attached to a watchlist stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockRating {
    Buy,
    Hold,
    Sell,
}

impl StockRating {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
        }
    }
}

impl Display for StockRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credit rating band for the bond dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    A,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "BB")]
    Bb,
}

impl BondRating {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Bbb => "BBB",
            Self::Bb => "BB",
        }
    }
}

impl Display for BondRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement currency of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset-class key used to group onboarding instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    Equities,
    FixedIncome,
    Alternatives,
    MultiAsset,
}

impl AssetClass {
    pub const ALL: [Self; 4] = [
        Self::Equities,
        Self::FixedIncome,
        Self::Alternatives,
        Self::MultiAsset,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equities => "equities",
            Self::FixedIncome => "fixed-income",
            Self::Alternatives => "alternatives",
            Self::MultiAsset => "multi-asset",
        }
    }

    /// Exact, case-sensitive key lookup. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == key)
    }
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watchlist stock snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: String,
    pub ticker: Ticker,
    pub company: String,
    pub sector: String,
    pub price: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: u64,
    pub rating: StockRating,
    pub last_updated: UtcDateTime,
}

impl StockRecord {
    /// Haystack for free-text search: `"{ticker} {company}"`.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.ticker, self.company)
    }
}

/// Full bond dossier entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondRecord {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub rating: BondRating,
    pub coupon_rate: f64,
    pub maturity: IsoDate,
    pub yield_to_maturity: f64,
    pub duration: f64,
    pub price: f64,
    pub currency: Currency,
    /// `None` for non-callable bonds; serialized as `null`.
    pub next_call: Option<IsoDate>,
    pub sector: String,
    pub issue_size: u64,
    pub last_traded: UtcDateTime,
}

impl BondRecord {
    pub fn summary(&self) -> BondSummary {
        BondSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            issuer: self.issuer.clone(),
            rating: self.rating,
        }
    }
}

/// List-view projection of a [`BondRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSummary {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub rating: BondRating,
}

/// Onboarding profile of the single demo client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBrief {
    pub name: String,
    pub email: String,
    pub firm: String,
    pub portfolio_size: String,
    pub mandate_type: String,
    pub risk_profile: String,
    pub horizon: String,
    pub asset_class: AssetClass,
    /// Id of the chosen [`Instrument`].
    pub instrument: String,
    pub notes: String,
}

/// Pick-list entry offered for an asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub ticker: Ticker,
}
