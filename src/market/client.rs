// client.rs
use crate::config::MarketConfig;
use crate::domain::PropertyTypeFilter;
use crate::market::models::{MarketResponse, Metric, SeriesPoint};
use crate::market::InsightsError;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

/// A source of metric time series for a suburb, oldest point first.
pub trait MarketSource {
    fn fetch_series(
        &self,
        suburb: &str,
        metric: Metric,
        filter: PropertyTypeFilter,
    ) -> Result<Vec<SeriesPoint>, InsightsError>;
}

/// Blocking client for the remote market-data endpoint.
pub struct MarketClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl MarketClient {
    pub fn new(config: &MarketConfig) -> Result<Self, InsightsError> {
        let client = Client::builder()
            .build()
            .map_err(|e| InsightsError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn query_params(
        suburb: &str,
        metric: Metric,
        filter: PropertyTypeFilter,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("suburb", suburb.to_string()),
            ("metric", metric.as_str().to_string()),
        ];
        if filter != PropertyTypeFilter::All {
            params.push(("property_type", filter.as_str().to_string()));
        }
        params
    }
}

impl MarketSource for MarketClient {
    fn fetch_series(
        &self,
        suburb: &str,
        metric: Metric,
        filter: PropertyTypeFilter,
    ) -> Result<Vec<SeriesPoint>, InsightsError> {
        let params = Self::query_params(suburb, metric, filter);
        debug!(%metric, suburb, endpoint = %self.endpoint, "requesting market series");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .query(&params)
            .send()
            .map_err(|e| InsightsError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| InsightsError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(InsightsError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_series(&text, metric)
    }
}

/// Pulls the trailing points of the first series out of a market API body.
/// Only the last two points feed a trend, so older points and any further
/// series are not decoded and may hold anything.
pub fn parse_series(body: &str, metric: Metric) -> Result<Vec<SeriesPoint>, InsightsError> {
    let parsed: MarketResponse =
        serde_json::from_str(body).map_err(|e| InsightsError::Parse(e.to_string()))?;

    let first = parsed
        .results
        .into_iter()
        .next()
        .ok_or(InsightsError::EmptyResult(metric))?;

    let points = first
        .as_array()
        .ok_or_else(|| InsightsError::Parse(format!("{metric} series is not an array")))?;

    let tail = &points[points.len().saturating_sub(2)..];
    tail.iter()
        .map(|point| {
            SeriesPoint::deserialize(point).map_err(|e| InsightsError::Parse(e.to_string()))
        })
        .collect()
}
