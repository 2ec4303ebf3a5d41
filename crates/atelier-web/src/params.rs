//! Lenient query-string reading for the list routes.
//!
//! The list operations never fail, so the query string is never rejected:
//! the first occurrence of a key wins, unknown keys are ignored and bad
//! escapes decode lossily.

use atelier_core::StockQuery;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self(pairs)
    }

    /// Value of the first `key` pair, as `URLSearchParams.get` returns it.
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }

    pub fn stock_query(&self) -> StockQuery {
        StockQuery {
            search: self.first("search"),
            sector: self.first("sector"),
            rating: self.first("rating"),
            change: self.first("change"),
            min_price: self.first("minPrice"),
            max_price: self.first("maxPrice"),
            min_cap: self.first("minCap"),
            max_cap: self.first("maxCap"),
        }
    }
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
