use fareview_core::{InsightKind, PriceInsight};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Amber,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl Badge {
    pub fn for_kind(kind: InsightKind) -> Self {
        match kind {
            InsightKind::Good => Badge { label: "Good Deal", color: BadgeColor::Green },
            InsightKind::Warning => Badge { label: "Act Soon", color: BadgeColor::Amber },
            InsightKind::Info => Badge { label: "AI Prediction", color: BadgeColor::Blue },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub badge: Badge,
}

impl From<&PriceInsight> for InsightCard {
    fn from(insight: &PriceInsight) -> Self {
        Self {
            icon: insight.icon.clone(),
            title: insight.title.clone(),
            description: insight.description.clone(),
            kind: insight.kind,
            badge: Badge::for_kind(insight.kind),
        }
    }
}

/// Shown while no search has produced insights yet.
pub fn sample_insights() -> Vec<PriceInsight> {
    vec![
        PriceInsight::new(
            "💰",
            "Great time to book",
            "Prices for popular routes are lower than usual this week.",
            InsightKind::Good,
        ),
        PriceInsight::new(
            "📈",
            "Weekend fares climbing",
            "Friday and Sunday departures are trending up. Consider flying midweek.",
            InsightKind::Warning,
        ),
        PriceInsight::new(
            "🔮",
            "Price forecast",
            "Search a route to get a two-week price forecast.",
            InsightKind::Info,
        ),
    ]
}

/// Insight panel cards, in input order. Content is not validated.
pub fn render_insight_panel(insights: &[PriceInsight]) -> Vec<InsightCard> {
    if insights.is_empty() {
        return sample_insights().iter().map(InsightCard::from).collect();
    }
    insights.iter().map(InsightCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_by_kind() {
        assert_eq!(Badge::for_kind(InsightKind::Good).label, "Good Deal");
        assert_eq!(Badge::for_kind(InsightKind::Warning).label, "Act Soon");
        assert_eq!(Badge::for_kind(InsightKind::Info).label, "AI Prediction");
        assert_eq!(Badge::for_kind(InsightKind::Warning).color, BadgeColor::Amber);
    }

    #[test]
    fn test_empty_panel_uses_samples() {
        let cards = render_insight_panel(&[]);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].badge.label, "Good Deal");
    }

    #[test]
    fn test_panel_keeps_order_and_content() {
        let insights = vec![
            PriceInsight::new("ℹ️", "", "", InsightKind::Info),
            PriceInsight::new("✅", "Cheap", "Very cheap", InsightKind::Good),
        ];
        let cards = render_insight_panel(&insights);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].badge.label, "AI Prediction");
        assert_eq!(cards[0].title, "");
        assert_eq!(cards[1].description, "Very cheap");

        let json = serde_json::to_value(&cards[1]).unwrap();
        assert_eq!(json["type"], "good");
        assert_eq!(json["badge"]["color"], "green");
    }
}
