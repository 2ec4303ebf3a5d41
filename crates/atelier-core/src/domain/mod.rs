//! # Domain Models
//!
//! Typed records served by the atelier desk.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockRecord`] | Watchlist stock snapshot |
//! | [`BondRecord`] | Full bond dossier entry |
//! | [`BondSummary`] | List-view projection of a bond |
//! | [`ServiceBrief`] | The single client onboarding profile |
//! | [`Instrument`] | Pick-list entry grouped by [`AssetClass`] |
//! | [`Ticker`] | Exchange ticker as spelled in the fixtures |
//! | [`UtcDateTime`] | RFC3339 timestamp |
//! | [`IsoDate`] | `YYYY-MM-DD` calendar date |
//!
//! Every record serializes with camelCase keys, which is the wire shape
//! expected by the browser front-end.

mod models;
mod ticker;
mod timestamp;

pub use models::{
    AssetClass, BondRating, BondRecord, BondSummary, Currency, Instrument, ServiceBrief,
    StockRating, StockRecord,
};
pub use ticker::Ticker;
pub use timestamp::{IsoDate, UtcDateTime};
