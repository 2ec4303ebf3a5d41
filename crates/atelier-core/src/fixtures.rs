//! Immutable in-memory fixture store.
//!
//! The bundled dataset is compiled into the binary from `fixtures/*.json`.
//! A directory holding the same four documents can be loaded instead with
//! [`FixtureStore::from_dir`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{AssetClass, BondRecord, CoreError, Instrument, ServiceBrief, StockRecord};

pub const STOCKS_DOCUMENT: &str = "stocks.json";
pub const BONDS_DOCUMENT: &str = "bonds.json";
pub const SERVICE_BRIEF_DOCUMENT: &str = "service_brief.json";
pub const INSTRUMENTS_DOCUMENT: &str = "instruments.json";

const BUNDLED_STOCKS: &str = include_str!("../fixtures/stocks.json");
const BUNDLED_BONDS: &str = include_str!("../fixtures/bonds.json");
const BUNDLED_SERVICE_BRIEF: &str = include_str!("../fixtures/service_brief.json");
const BUNDLED_INSTRUMENTS: &str = include_str!("../fixtures/instruments.json");

/// Load-once, read-many store backing every desk query.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    stocks: Vec<StockRecord>,
    bonds: Vec<BondRecord>,
    service_brief: ServiceBrief,
    instruments: HashMap<AssetClass, Vec<Instrument>>,
    sectors: Vec<String>,
}

impl FixtureStore {
    pub fn new(
        stocks: Vec<StockRecord>,
        bonds: Vec<BondRecord>,
        service_brief: ServiceBrief,
        instruments: HashMap<AssetClass, Vec<Instrument>>,
    ) -> Self {
        let sectors = distinct_sectors(&stocks);
        Self {
            stocks,
            bonds,
            service_brief,
            instruments,
            sectors,
        }
    }

    /// Parse the dataset compiled into this crate.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_documents(
            BUNDLED_STOCKS,
            BUNDLED_BONDS,
            BUNDLED_SERVICE_BRIEF,
            BUNDLED_INSTRUMENTS,
        )
    }

    /// Load the four fixture documents from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let dir = dir.as_ref();
        let stocks = read_document(dir, STOCKS_DOCUMENT)?;
        let bonds = read_document(dir, BONDS_DOCUMENT)?;
        let service_brief = read_document(dir, SERVICE_BRIEF_DOCUMENT)?;
        let instruments = read_document(dir, INSTRUMENTS_DOCUMENT)?;

        Self::from_documents(&stocks, &bonds, &service_brief, &instruments)
    }

    pub fn from_documents(
        stocks: &str,
        bonds: &str,
        service_brief: &str,
        instruments: &str,
    ) -> Result<Self, CoreError> {
        let store = Self::new(
            parse_document(STOCKS_DOCUMENT, stocks)?,
            parse_document(BONDS_DOCUMENT, bonds)?,
            parse_document(SERVICE_BRIEF_DOCUMENT, service_brief)?,
            parse_document(INSTRUMENTS_DOCUMENT, instruments)?,
        );

        tracing::debug!(
            stocks = store.stocks.len(),
            bonds = store.bonds.len(),
            sectors = store.sectors.len(),
            "fixture store loaded"
        );

        Ok(store)
    }

    pub fn stocks(&self) -> &[StockRecord] {
        &self.stocks
    }

    pub fn bonds(&self) -> &[BondRecord] {
        &self.bonds
    }

    pub fn service_brief(&self) -> &ServiceBrief {
        &self.service_brief
    }

    /// Instruments for one asset class; empty when the class has no entry.
    pub fn instruments(&self, asset_class: AssetClass) -> &[Instrument] {
        self.instruments
            .get(&asset_class)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct stock sectors in order of first appearance.
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }
}

fn distinct_sectors(stocks: &[StockRecord]) -> Vec<String> {
    let mut sectors: Vec<String> = Vec::new();
    for stock in stocks {
        if !sectors.iter().any(|sector| sector == &stock.sector) {
            sectors.push(stock.sector.clone());
        }
    }
    sectors
}

fn read_document(dir: &Path, name: &'static str) -> Result<String, CoreError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| CoreError::Io { path, source })
}

fn parse_document<T: DeserializeOwned>(document: &'static str, raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(raw).map_err(|source| CoreError::Fixture { document, source })
}
