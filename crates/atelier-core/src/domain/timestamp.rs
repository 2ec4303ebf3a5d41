use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// RFC3339 instant. Fixtures carry `Z` timestamps and `now()` is UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcDateTime(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Calendar date on the wire as `YYYY-MM-DD` (maturity and call dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDate(#[serde(with = "iso_date")] Date);

impl IsoDate {
    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        Date::parse(input, ISO_DATE).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_keeps_utc_suffix_on_the_wire() {
        let parsed: UtcDateTime =
            serde_json::from_str("\"2024-06-14T15:30:00Z\"").expect("must parse");
        assert_eq!(parsed.to_string(), "2024-06-14T15:30:00Z");
        assert_eq!(
            serde_json::to_string(&parsed).expect("serializes"),
            "\"2024-06-14T15:30:00Z\""
        );
    }

    #[test]
    fn now_renders_as_utc() {
        assert!(UtcDateTime::now().to_string().ends_with('Z'));
    }

    #[test]
    fn malformed_timestamp_fails_to_deserialize() {
        assert!(serde_json::from_str::<UtcDateTime>("\"14/06/2024 15:30\"").is_err());
    }

    #[test]
    fn iso_date_serializes_as_plain_date() {
        let parsed = IsoDate::parse("2035-11-30").expect("must parse");
        assert_eq!(
            serde_json::to_string(&parsed).expect("serializes"),
            "\"2035-11-30\""
        );
        let back: IsoDate = serde_json::from_str("\"2035-11-30\"").expect("deserializes");
        assert_eq!(back, parsed);
    }

    #[test]
    fn rejects_non_calendar_date() {
        assert!(IsoDate::parse("2035-02-30").is_err());
        assert!(IsoDate::parse("30/11/2035").is_err());
        assert!(serde_json::from_str::<IsoDate>("\"2035-02-30\"").is_err());
    }
}
