//! `DD/MM/YYYY` date handling for the grocery expiry field.
//!
//! Parsing is strict: a malformed string surfaces [`InventoryError::InvalidDateFormat`]
//! instead of silently substituting the current date.

use chrono::NaiveDate;

use stockroom_core::{InventoryError, InventoryResult};

/// The wire/display format for calendar dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string into a calendar date.
pub fn parse_date(raw: &str) -> InventoryResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| InventoryError::invalid_date(raw.trim()))
}

/// Render a calendar date back into the `DD/MM/YYYY` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter so expiry dates cross the wire as `DD/MM/YYYY` strings.
pub mod wire {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_dates() {
        let date = parse_date("01/01/2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(format_date(date), "01/01/2020");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_date(" 15/06/2024 ").is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["2020-01-01", "32/01/2020", "01/13/2020", "not a date", ""] {
            let err = parse_date(raw).unwrap_err();
            assert!(
                matches!(err, InventoryError::InvalidDateFormat(_)),
                "expected InvalidDateFormat for {raw:?}, got {err:?}"
            );
        }
    }
}
