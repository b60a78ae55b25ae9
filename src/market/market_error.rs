use crate::market::models::Metric;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Market API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("No {0} data returned for this suburb")]
    EmptyResult(Metric),
    #[error("Cannot compute a {0} trend from a previous value of zero")]
    UndefinedTrend(Metric),
}
