use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_MARKET_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/market";
pub const DEFAULT_MARKET_TOKEN: &str = "test";
pub const DEFAULT_SUBURB: &str = "Belmont North";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got: {value}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Where the market-data API lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub endpoint: String,
    pub api_token: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub default_suburb: String,
    pub market: MarketConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys fall back
    /// to the defaults; set-but-malformed keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("SUBURB_INSIGHTS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let bind_addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "SUBURB_INSIGHTS_ADDR",
                value: addr_raw.clone(),
            })?;

        let max_workers = match lookup("SUBURB_INSIGHTS_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "SUBURB_INSIGHTS_WORKERS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_WORKERS,
        };

        let endpoint = non_empty(&lookup, "MARKET_API_URL", DEFAULT_MARKET_URL)?;
        let api_token = non_empty(&lookup, "MARKET_API_TOKEN", DEFAULT_MARKET_TOKEN)?;
        let default_suburb = non_empty(&lookup, "DEFAULT_SUBURB", DEFAULT_SUBURB)?;

        Ok(Self {
            bind_addr,
            max_workers,
            default_suburb,
            market: MarketConfig {
                endpoint,
                api_token,
            },
        })
    }
}

fn non_empty<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(default.to_string()),
    }
}
