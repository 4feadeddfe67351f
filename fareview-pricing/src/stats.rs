use fareview_core::PriceTrendPoint;
use serde::Serialize;

/// Window, in points, used to judge the direction of a series.
pub const TREND_WINDOW: usize = 7;

/// Percent change beyond which a series counts as moving.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

impl PriceTrend {
    pub fn emoji(self) -> &'static str {
        match self {
            PriceTrend::Rising => "↗️",
            PriceTrend::Falling => "↘️",
            PriceTrend::Stable => "➡️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub median: f64,
    pub trend: PriceTrend,
    pub trend_emoji: &'static str,
}

/// Compare the first and last price of the trailing window.
pub fn trend_of(points: &[PriceTrendPoint]) -> PriceTrend {
    let window = &points[points.len().saturating_sub(TREND_WINDOW)..];
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return PriceTrend::Stable;
    };
    if window.len() < 2 || first.price <= 0.0 {
        return PriceTrend::Stable;
    }

    let change_pct = (last.price - first.price) / first.price * 100.0;
    if change_pct > TREND_THRESHOLD_PCT {
        PriceTrend::Rising
    } else if change_pct < -TREND_THRESHOLD_PCT {
        PriceTrend::Falling
    } else {
        PriceTrend::Stable
    }
}

/// Returns `None` for an empty series.
pub fn summarize(points: &[PriceTrendPoint]) -> Option<PriceSummary> {
    if points.is_empty() {
        return None;
    }

    let mut prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    prices.sort_by(f64::total_cmp);

    let trend = trend_of(points);
    Some(PriceSummary {
        min: prices[0],
        max: prices[prices.len() - 1],
        average: prices.iter().sum::<f64>() / prices.len() as f64,
        median: prices[prices.len() / 2],
        trend,
        trend_emoji: trend.emoji(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(prices: &[f64]) -> Vec<PriceTrendPoint> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PriceTrendPoint {
                date: start + Duration::days(i as i64),
                price,
                is_lowest_price: false,
            })
            .collect()
    }

    #[test]
    fn test_summary_stats() {
        let summary = summarize(&series(&[300.0, 200.0, 400.0, 100.0])).unwrap();
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 400.0);
        assert_eq!(summary.average, 250.0);
        assert_eq!(summary.median, 300.0);
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_trend_uses_trailing_week() {
        // An early spike outside the window does not count.
        let mut prices = vec![900.0, 100.0];
        prices.extend([200.0, 205.0, 210.0, 208.0, 212.0, 215.0, 230.0]);
        assert_eq!(trend_of(&series(&prices)), PriceTrend::Rising);

        assert_eq!(trend_of(&series(&[300.0, 290.0, 250.0])), PriceTrend::Falling);
        assert_eq!(trend_of(&series(&[300.0, 310.0])), PriceTrend::Stable);
        assert_eq!(trend_of(&series(&[300.0])), PriceTrend::Stable);
    }

    #[test]
    fn test_trend_emoji() {
        assert_eq!(PriceTrend::Rising.emoji(), "↗️");
        assert_eq!(PriceTrend::Falling.emoji(), "↘️");
        assert_eq!(PriceTrend::Stable.emoji(), "➡️");
    }
}
