use std::fmt;
use std::sync::LazyLock;

use chrono::{Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

static AIRPORT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("airport code pattern is valid"));

/// Maximum characters an airport code field accepts.
pub const AIRPORT_CODE_LEN: usize = 3;

/// A 3-letter uppercase IATA-style airport code.
///
/// Only constructed through [`AirportCode::parse`], so holding one means the
/// shape check already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Accepts exactly three uppercase ASCII letters. No normalization happens here.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == AIRPORT_CODE_LEN && AIRPORT_CODE.is_match(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AirportCode::parse(&value).ok_or_else(|| format!("invalid airport code: {value}"))
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

/// Keystroke normalization for an airport code field: uppercase, then keep
/// at most the first three characters.
pub fn normalize_airport_input(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .take(AIRPORT_CODE_LEN)
        .collect()
}

/// Lower bound for date pickers. Callers pass the local calendar date.
pub fn min_selectable_date(today: NaiveDate) -> NaiveDate {
    today
}

/// Upper bound for date pickers: one calendar year ahead.
/// Feb 29 maps onto Feb 28 in non-leap years.
pub fn max_selectable_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_months(Months::new(12)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_truncates() {
        assert_eq!(normalize_airport_input("jfk"), "JFK");
        assert_eq!(normalize_airport_input("laxx"), "LAX");
        assert_eq!(normalize_airport_input("s"), "S");
        assert_eq!(normalize_airport_input(""), "");
        assert_eq!(normalize_airport_input(" jfk"), " JF");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for code in ["JFK", "LAX", "ORD"] {
            let once = normalize_airport_input(code);
            assert_eq!(once, code);
            assert_eq!(normalize_airport_input(&once), once);
        }
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["", "JF", "JFKX", "jfk", "J1K", "J K", "ÅBC"] {
            assert!(AirportCode::parse(bad).is_none(), "{bad:?} should be rejected");
        }
        assert_eq!(AirportCode::parse("SFO").unwrap().as_str(), "SFO");
    }

    #[test]
    fn test_airport_code_deserialization() {
        let code: AirportCode = serde_json::from_str("\"LHR\"").unwrap();
        assert_eq!(code.to_string(), "LHR");
        assert!(serde_json::from_str::<AirportCode>("\"lhr\"").is_err());
    }

    #[test]
    fn test_date_bounds() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(min_selectable_date(today), today);
        assert_eq!(max_selectable_date(today), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}
