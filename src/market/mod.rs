mod client;
mod insights;
mod market_error;
mod models;

pub use client::{parse_series, MarketClient, MarketSource};
pub use insights::{
    fetch_market_insights, price_insight, vacancy_insight, MarketInsights, PriceInsight,
    TrendDirection, VacancyInsight,
};
pub use market_error::InsightsError;
pub use models::{MarketResponse, Metric, SeriesPoint};
