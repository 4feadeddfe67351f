pub mod chart;
pub mod generator;
pub mod insight;
pub mod stats;

pub use chart::{render_price_chart, PriceChart};
pub use generator::{PriceSeriesConfig, PriceSeriesGenerator};
pub use insight::{render_insight_panel, InsightCard};
pub use stats::{summarize, PriceSummary, PriceTrend};

/// Currency display used by the chart and summaries.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
