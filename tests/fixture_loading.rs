//! Fixture loading from an on-disk directory.

use std::fs;
use std::path::Path;

use atelier_core::fixtures::{
    BONDS_DOCUMENT, INSTRUMENTS_DOCUMENT, SERVICE_BRIEF_DOCUMENT, STOCKS_DOCUMENT,
};
use atelier_core::{CoreError, DeskConfig, FixtureStore};
use tempfile::TempDir;

const STOCKS: &str = r#"[
  {
    "id": "stock-a",
    "ticker": "alpha",
    "company": "Alpha Widgets",
    "sector": "Industrials",
    "price": 10.5,
    "changePercent": 1.0,
    "volume": 1000,
    "marketCap": 500000000,
    "rating": "Buy",
    "lastUpdated": "2024-06-14T15:30:00Z"
  },
  {
    "id": "stock-b",
    "ticker": "BETA",
    "company": "Beta Foods",
    "sector": "Consumer",
    "price": 22.0,
    "changePercent": -0.5,
    "volume": 2000,
    "marketCap": 900000000,
    "rating": "Hold",
    "lastUpdated": "2024-06-14T15:30:00Z"
  }
]"#;

const BONDS: &str = r#"[
  {
    "id": "bond-a",
    "name": "Alpha 2030",
    "issuer": "Alpha Widgets Inc",
    "rating": "BBB",
    "couponRate": 4.5,
    "maturity": "2030-06-01",
    "yieldToMaturity": 4.9,
    "duration": 5.2,
    "price": 98.0,
    "currency": "USD",
    "nextCall": null,
    "sector": "Industrials",
    "issueSize": 250000000,
    "lastTraded": "2024-06-14T12:00:00Z"
  }
]"#;

const BRIEF: &str = r#"{
  "name": "Test Client",
  "email": "client@example.com",
  "firm": "Test Office",
  "portfolioSize": "$1M - $5M",
  "mandateType": "Advisory",
  "riskProfile": "Conservative",
  "horizon": "3-5 years",
  "assetClass": "fixed-income",
  "instrument": "inst-fi-a",
  "notes": ""
}"#;

const INSTRUMENTS: &str = r#"{
  "fixed-income": [
    { "id": "inst-fi-a", "name": "Test Bond Fund", "ticker": "TBF" }
  ]
}"#;

fn write_documents(dir: &Path) {
    fs::write(dir.join(STOCKS_DOCUMENT), STOCKS).expect("write stocks");
    fs::write(dir.join(BONDS_DOCUMENT), BONDS).expect("write bonds");
    fs::write(dir.join(SERVICE_BRIEF_DOCUMENT), BRIEF).expect("write brief");
    fs::write(dir.join(INSTRUMENTS_DOCUMENT), INSTRUMENTS).expect("write instruments");
}

#[test]
fn when_directory_holds_all_documents_store_loads_them() {
    // Given: A directory with four valid documents
    let dir = TempDir::new().expect("temp dir");
    write_documents(dir.path());

    // When: The store is loaded from it
    let store = FixtureStore::from_dir(dir.path()).expect("directory loads");

    // Then: Its contents replace the bundled dataset
    assert_eq!(store.stocks().len(), 2);
    assert_eq!(store.stocks()[0].ticker.as_str(), "ALPHA");
    assert_eq!(store.sectors(), ["Industrials", "Consumer"]);
    assert_eq!(store.bonds().len(), 1);
    assert_eq!(store.brief().firm, "Test Office");
    assert_eq!(store.list_instruments(Some("fixed-income")).len(), 1);
    assert!(store.list_instruments(Some("equities")).is_empty());
}

#[test]
fn when_document_missing_load_fails_with_its_path() {
    let dir = TempDir::new().expect("temp dir");
    write_documents(dir.path());
    fs::remove_file(dir.path().join(BONDS_DOCUMENT)).expect("remove bonds");

    let err = FixtureStore::from_dir(dir.path()).expect_err("bonds missing");

    match err {
        CoreError::Io { path, .. } => assert!(path.ends_with(BONDS_DOCUMENT)),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn when_document_malformed_load_fails_naming_the_document() {
    let dir = TempDir::new().expect("temp dir");
    write_documents(dir.path());
    fs::write(dir.path().join(STOCKS_DOCUMENT), "{ not json").expect("overwrite stocks");

    let err = FixtureStore::from_dir(dir.path()).expect_err("stocks malformed");

    assert!(matches!(
        err,
        CoreError::Fixture {
            document: STOCKS_DOCUMENT,
            ..
        }
    ));
    assert!(err.to_string().contains(STOCKS_DOCUMENT));
}

#[test]
fn when_ticker_invalid_load_fails() {
    let dir = TempDir::new().expect("temp dir");
    write_documents(dir.path());
    fs::write(
        dir.path().join(INSTRUMENTS_DOCUMENT),
        r#"{ "equities": [{ "id": "x", "name": "Bad", "ticker": "1BAD" }] }"#,
    )
    .expect("overwrite instruments");

    let err = FixtureStore::from_dir(dir.path()).expect_err("ticker rejected");

    assert!(matches!(
        err,
        CoreError::Fixture {
            document: INSTRUMENTS_DOCUMENT,
            ..
        }
    ));
}

#[test]
fn desk_config_uses_configured_directory() {
    let dir = TempDir::new().expect("temp dir");
    write_documents(dir.path());

    let desk = DeskConfig::default()
        .with_fixtures_dir(Some(dir.path().to_path_buf()))
        .open()
        .expect("desk opens");

    assert_eq!(desk.store().stocks().len(), 2);
}
