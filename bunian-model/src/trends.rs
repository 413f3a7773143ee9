use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// The single market-snapshot record shown on the trends page.
///
/// Unlike the portfolio collections this is one document, replaced field by
/// field through [`MarketTrendPatch`]. `last_updated` is stamped by the
/// panel on every update and is never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub trending_areas: Vec<String>,
    pub market_mood: MarketMood,
    /// Mood gauge position, 0–100.
    pub market_mood_value: u8,
    pub most_requested_type: String,
    pub average_budget: AverageBudget,
    pub insights: Vec<String>,
    /// Stamp of the last edit as `Month YYYY`, e.g. `December 2024`.
    pub last_updated: String,
}

/// Budget band quoted for the most requested property type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageBudget {
    pub min: String,
    pub max: String,
    pub trend: BudgetTrend,
}

/// Overall market sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketMood {
    Bullish,
    Neutral,
    Bearish,
}

impl MarketMood {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Neutral => "neutral",
            Self::Bearish => "bearish",
        }
    }
}

impl fmt::Display for MarketMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketMood {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bullish" => Ok(Self::Bullish),
            "neutral" => Ok(Self::Neutral),
            "bearish" => Ok(Self::Bearish),
            other => Err(ParseEnumError::new("market mood", other)),
        }
    }
}

/// Direction of the quoted budget band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTrend {
    Up,
    Stable,
    Down,
}

impl BudgetTrend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Stable => "stable",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for BudgetTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTrend {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "stable" => Ok(Self::Stable),
            "down" => Ok(Self::Down),
            other => Err(ParseEnumError::new("budget trend", other)),
        }
    }
}

/// Partial update for the market snapshot. Carries no `lastUpdated` field:
/// the stamp always comes from the clock at update time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketTrendPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_areas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_mood: Option<MarketMood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_mood_value: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_requested_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_budget: Option<AverageBudget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<String>>,
}

impl MarketTrendPatch {
    /// Applies the patch, leaving unset fields untouched. The caller is
    /// responsible for stamping `last_updated`.
    pub fn apply(self, trend: &mut MarketTrend) {
        if let Some(v) = self.trending_areas {
            trend.trending_areas = v;
        }
        if let Some(v) = self.market_mood {
            trend.market_mood = v;
        }
        if let Some(v) = self.market_mood_value {
            trend.market_mood_value = v;
        }
        if let Some(v) = self.most_requested_type {
            trend.most_requested_type = v;
        }
        if let Some(v) = self.average_budget {
            trend.average_budget = v;
        }
        if let Some(v) = self.insights {
            trend.insights = v;
        }
    }
}
