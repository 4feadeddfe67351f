use chrono::{Duration, NaiveDate};
use fareview_core::PriceTrendPoint;
use serde::Serialize;

use crate::format_price;

/// Fraction of the observed bound added above and below the series.
pub const Y_AXIS_BUFFER: f64 = 0.10;

/// Chart model for a daily price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChart {
    pub points: Vec<ChartPoint>,
    /// The highlighted cheapest-day markers.
    pub lowest_points: Vec<ChartPoint>,
    pub y_axis: AxisRange,
    /// True when the input was empty and the illustrative sample is shown.
    pub is_sample: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub label: String,
    pub price: f64,
    pub formatted_price: String,
    pub is_lowest_price: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Illustrative week shown before any search has completed.
pub fn sample_price_trends(start: NaiveDate) -> Vec<PriceTrendPoint> {
    [349.0, 329.0, 312.0, 289.0, 305.0, 334.0, 358.0]
        .into_iter()
        .enumerate()
        .map(|(i, price)| PriceTrendPoint {
            date: start + Duration::days(i as i64),
            price,
            is_lowest_price: i == 3,
        })
        .collect()
}

/// Observed min/max padded by [`Y_AXIS_BUFFER`], floored at zero.
/// A flat series still gets a non-zero range.
pub fn y_axis_range(points: &[PriceTrendPoint]) -> AxisRange {
    let (lo, hi) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.price), hi.max(p.price))
    });

    if !lo.is_finite() || !hi.is_finite() {
        return AxisRange { min: 0.0, max: 1.0 };
    }

    let min = (lo * (1.0 - Y_AXIS_BUFFER)).max(0.0);
    let mut max = hi * (1.0 + Y_AXIS_BUFFER);
    if max <= min {
        max = min + 1.0;
    }
    AxisRange { min, max }
}

/// Project a price series into a chart. The input is only read.
pub fn render_price_chart(points: &[PriceTrendPoint], today: NaiveDate) -> PriceChart {
    let sample;
    let (series, is_sample) = if points.is_empty() {
        sample = sample_price_trends(today);
        (sample.as_slice(), true)
    } else {
        (points, false)
    };

    let chart_points: Vec<ChartPoint> = series
        .iter()
        .map(|p| ChartPoint {
            date: p.date,
            label: p.date.format("%b %d").to_string(),
            price: p.price,
            formatted_price: format_price(p.price),
            is_lowest_price: p.is_lowest_price,
        })
        .collect();

    let lowest_points = chart_points.iter().filter(|p| p.is_lowest_price).cloned().collect();

    PriceChart {
        y_axis: y_axis_range(series),
        points: chart_points,
        lowest_points,
        is_sample,
    }
}
