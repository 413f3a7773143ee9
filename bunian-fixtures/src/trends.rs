use bunian_model::{AverageBudget, BudgetTrend, MarketMood, MarketTrend};

/// The market snapshot shown until an admin first edits it.
#[must_use]
pub fn market_trend() -> MarketTrend {
    MarketTrend {
        trending_areas: vec![
            "Lekki Phase 1".into(),
            "Victoria Island".into(),
            "Ikoyi".into(),
            "Banana Island".into(),
            "Ikeja GRA".into(),
        ],
        market_mood: MarketMood::Bullish,
        market_mood_value: 72,
        most_requested_type: "3-4 Bedroom Apartments".into(),
        average_budget: AverageBudget {
            min: "₦80M".into(),
            max: "₦250M".into(),
            trend: BudgetTrend::Up,
        },
        insights: vec![
            "Luxury apartments seeing 15% YoY growth".into(),
            "Commercial spaces in VI remain in high demand".into(),
            "New developments in Lekki attracting foreign investors".into(),
        ],
        last_updated: "December 2024".into(),
    }
}
