use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::airport::AirportCode;

/// Raw search form input, before normalization and validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForm {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, alias = "date")]
    pub depart_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub passengers: Option<u32>,
}

/// Validated search parameters. Doubles as the single-flight key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub depart_date: NaiveDate,
    pub return_date: NaiveDate,
    pub passengers: u32,
}

impl SearchParams {
    /// The validator never rejects this; it is surfaced as a warning only.
    pub fn return_date_precedes_departure(&self) -> bool {
        self.return_date < self.depart_date
    }
}

/// One day's price plus the cheapest-in-series flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTrendPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub is_lowest_price: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Good,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInsight {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

impl PriceInsight {
    pub fn new(icon: &str, title: &str, description: &str, kind: InsightKind) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub price_trends: Vec<PriceTrendPoint>,
    pub insights: Vec<PriceInsight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_form_deserialization() {
        let json = r#"
            {
                "origin": "jfk",
                "destination": "LAX",
                "date": "2024-12-25"
            }
        "#;
        let form: SearchForm = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(form.origin, "jfk");
        assert_eq!(form.depart_date.as_deref(), Some("2024-12-25"));
        assert_eq!(form.return_date, None);
        assert_eq!(form.passengers, None);
    }

    #[test]
    fn test_search_result_wire_shape() {
        let result = SearchResult {
            price_trends: vec![PriceTrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
                price: 289.5,
                is_lowest_price: true,
            }],
            insights: vec![PriceInsight::new("📉", "Low fares", "Prices dipped", InsightKind::Good)],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["priceTrends"][0]["date"], "2024-12-25");
        assert_eq!(value["priceTrends"][0]["isLowestPrice"], true);
        assert_eq!(value["insights"][0]["type"], "good");
    }

    #[test]
    fn test_return_before_departure_is_reported() {
        let params = SearchParams {
            origin: AirportCode::parse("JFK").unwrap(),
            destination: AirportCode::parse("LAX").unwrap(),
            depart_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            passengers: 1,
        };
        assert!(params.return_date_precedes_departure());
    }
}
