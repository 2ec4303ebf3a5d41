use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Exchange ticker exactly as the desk fixtures spell it.
///
/// Fixture data is trusted, so tickers are neither normalized nor checked.
/// Search matching lowercases both sides and does not depend on the case
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_spelling_is_kept_verbatim() {
        let ticker: Ticker = serde_json::from_str("\"brk.b \"").expect("any string is a ticker");
        assert_eq!(ticker.as_str(), "brk.b ");
        assert_eq!(
            serde_json::to_string(&ticker).expect("serializes"),
            "\"brk.b \""
        );
    }

    #[test]
    fn empty_ticker_is_accepted() {
        let ticker: Ticker = serde_json::from_str("\"\"").expect("trusted data");
        assert_eq!(ticker.to_string(), "");
    }
}
