use serde::Deserialize;
use std::fmt;

// response
//  └── results
//       ├── [0]            <- the series we want
//       │    ├── { value } <- never decoded
//       │    ├── { value } <- previous
//       │    └── { value } <- latest
//       └── [1..]          <- ignored, any shape

#[derive(Debug, Deserialize)]
pub struct MarketResponse {
    pub results: Vec<serde_json::Value>,
}

/// One observation of a metric. Points arrive oldest first; anything besides
/// `value` (dates, labels) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SeriesPoint {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Vacancy,
    Price,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Vacancy => "vacancy",
            Metric::Price => "price",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
