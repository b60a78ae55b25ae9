use crate::domain::PropertyTypeFilter;
use crate::market::client::MarketSource;
use crate::market::models::{Metric, SeriesPoint};
use crate::market::InsightsError;
use std::fmt;

/// Vacancy moves of at most this many percentage points count as stable.
pub const VACANCY_STABLE_THRESHOLD: f64 = 0.1;
/// Price moves of at most this many percent count as stable.
pub const PRICE_STABLE_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Stable,
    Increasing,
    Decreasing,
}

impl TrendDirection {
    pub fn classify(trend: f64, threshold: f64) -> Self {
        if trend.abs() <= threshold {
            TrendDirection::Stable
        } else if trend > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            TrendDirection::Stable => "Stable",
            TrendDirection::Increasing => "Increasing from last month",
            TrendDirection::Decreasing => "Decreasing from last month",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VacancyInsight {
    /// Latest vacancy rate, in percent.
    pub rate: f64,
    /// Change since the previous point, in percentage points.
    pub trend: f64,
    pub trend_text: TrendDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceInsight {
    /// Latest median price.
    pub value: f64,
    /// Change since the previous point, in percent.
    pub trend: f64,
    pub trend_text: TrendDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketInsights {
    pub vacancy: VacancyInsight,
    pub price: PriceInsight,
}

/// Latest and previous points. A single point stands in for both.
fn latest_two(series: &[SeriesPoint], metric: Metric) -> Result<(f64, f64), InsightsError> {
    match series {
        [] => Err(InsightsError::EmptyResult(metric)),
        [only] => Ok((only.value, only.value)),
        [.., previous, latest] => Ok((latest.value, previous.value)),
    }
}

pub fn vacancy_insight(series: &[SeriesPoint]) -> Result<VacancyInsight, InsightsError> {
    let (latest, previous) = latest_two(series, Metric::Vacancy)?;

    let rate = latest * 100.0;
    let trend = rate - previous * 100.0;

    Ok(VacancyInsight {
        rate,
        trend,
        trend_text: TrendDirection::classify(trend, VACANCY_STABLE_THRESHOLD),
    })
}

pub fn price_insight(series: &[SeriesPoint]) -> Result<PriceInsight, InsightsError> {
    let (latest, previous) = latest_two(series, Metric::Price)?;

    if previous == 0.0 {
        return Err(InsightsError::UndefinedTrend(Metric::Price));
    }
    let trend = (latest - previous) / previous * 100.0;

    Ok(PriceInsight {
        value: latest,
        trend,
        trend_text: TrendDirection::classify(trend, PRICE_STABLE_THRESHOLD),
    })
}

/// Fetches the vacancy series, then the price series, and derives both trends.
/// Any failure along the way aborts the whole call; the caller decides what
/// "insights unavailable" looks like.
pub fn fetch_market_insights<M: MarketSource + ?Sized>(
    source: &M,
    suburb: &str,
    filter: PropertyTypeFilter,
) -> Result<MarketInsights, InsightsError> {
    let vacancy_series = source.fetch_series(suburb, Metric::Vacancy, filter)?;
    let price_series = source.fetch_series(suburb, Metric::Price, filter)?;

    Ok(MarketInsights {
        vacancy: vacancy_insight(&vacancy_series)?,
        price: price_insight(&price_series)?,
    })
}
