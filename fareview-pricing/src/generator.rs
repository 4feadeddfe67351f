use chrono::{Duration, NaiveDate};
use fareview_core::{InsightKind, PriceInsight, PriceTrendPoint};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape of a synthesized daily price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeriesConfig {
    /// Number of daily points, starting at the first date.
    pub days: u32,

    /// Fare every day starts from before noise and dips.
    pub base_price: f64,

    /// Upper bound of the uniform noise added to each day.
    pub jitter: f64,

    /// Discount on every 3rd day.
    pub third_day_dip: f64,

    /// Discount on every 7th day. Stacks with the 3rd-day dip on day 21.
    pub seventh_day_dip: f64,
}

impl Default for PriceSeriesConfig {
    fn default() -> Self {
        Self {
            days: 14,
            base_price: 300.0,
            jitter: 80.0,
            third_day_dip: 40.0,
            seventh_day_dip: 60.0,
        }
    }
}

/// Synthesizes price series for the mock search backend.
pub struct PriceSeriesGenerator {
    config: PriceSeriesConfig,
}

impl PriceSeriesGenerator {
    pub fn new(config: PriceSeriesConfig) -> Self {
        Self { config }
    }

    /// Price for day `index`, before rounding.
    fn day_price<R: Rng + ?Sized>(&self, index: u32, rng: &mut R) -> f64 {
        let mut price = self.config.base_price;
        if self.config.jitter > 0.0 {
            price += rng.gen_range(0.0..=self.config.jitter);
        }
        if index > 0 && index % 3 == 0 {
            price -= self.config.third_day_dip;
        }
        if index > 0 && index % 7 == 0 {
            price -= self.config.seventh_day_dip;
        }
        price.max(0.0)
    }

    /// One point per day from `start`, dates strictly increasing,
    /// exactly one point flagged as the lowest.
    pub fn generate<R: Rng + ?Sized>(&self, start: NaiveDate, rng: &mut R) -> Vec<PriceTrendPoint> {
        let mut points: Vec<PriceTrendPoint> = (0..self.config.days)
            .map(|i| PriceTrendPoint {
                date: start + Duration::days(i64::from(i)),
                price: round_cents(self.day_price(i, rng)),
                is_lowest_price: false,
            })
            .collect();

        mark_lowest(&mut points);
        points
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Flag the first point holding the minimum price, clearing any other flags.
pub fn mark_lowest(points: &mut [PriceTrendPoint]) {
    let lowest = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.price.total_cmp(&b.price))
        .map(|(i, _)| i);

    for (i, point) in points.iter_mut().enumerate() {
        point.is_lowest_price = Some(i) == lowest;
    }
}

/// The advisory list the mock backend returns for every search.
pub fn default_insights() -> Vec<PriceInsight> {
    vec![
        PriceInsight::new(
            "📉",
            "Prices are below average",
            "Current fares on this route are about 12% lower than the 30-day average.",
            InsightKind::Good,
        ),
        PriceInsight::new(
            "⏰",
            "Prices likely to rise",
            "Fares for these dates usually climb within the next 5 days. Book soon to lock in this price.",
            InsightKind::Warning,
        ),
        PriceInsight::new(
            "🤖",
            "Cheapest day to fly",
            "Midweek departures are forecast to be the cheapest over the next two weeks.",
            InsightKind::Info,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_series_has_fourteen_increasing_days() {
        let generator = PriceSeriesGenerator::new(PriceSeriesConfig::default());
        let points = generator.generate(start(), &mut StdRng::seed_from_u64(42));

        assert_eq!(points.len(), 14);
        assert_eq!(points[0].date, start());
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        assert!(points.iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_lowest_flag_tracks_actual_minimum() {
        let generator = PriceSeriesGenerator::new(PriceSeriesConfig::default());
        let points = generator.generate(start(), &mut StdRng::seed_from_u64(3));

        let flagged: Vec<_> = points.iter().filter(|p| p.is_lowest_price).collect();
        assert_eq!(flagged.len(), 1);
        let min = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        assert_eq!(flagged[0].price, min);
    }

    #[test]
    fn test_dips_without_noise() {
        let generator = PriceSeriesGenerator::new(PriceSeriesConfig {
            jitter: 0.0,
            ..Default::default()
        });
        let points = generator.generate(start(), &mut StdRng::seed_from_u64(0));

        assert_eq!(points[0].price, 300.0);
        assert_eq!(points[3].price, 260.0);
        assert_eq!(points[7].price, 240.0);
        // day 7 carries the deepest dip
        assert!(points[7].is_lowest_price);
    }

    #[test]
    fn test_mark_lowest_prefers_first_tie() {
        let mut points: Vec<_> = [120.0, 90.0, 90.0]
            .iter()
            .enumerate()
            .map(|(i, &price)| PriceTrendPoint {
                date: start() + Duration::days(i as i64),
                price,
                is_lowest_price: true,
            })
            .collect();
        mark_lowest(&mut points);
        assert_eq!(
            points.iter().map(|p| p.is_lowest_price).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_default_insights_cover_each_kind() {
        let insights = default_insights();
        assert_eq!(insights.len(), 3);
        assert_eq!(
            insights.iter().map(|i| i.kind).collect::<Vec<_>>(),
            vec![InsightKind::Good, InsightKind::Warning, InsightKind::Info]
        );
    }
}
