// src/report.rs

use crate::config::{AppConfig, ConfigError, MarketConfig};
use crate::domain::property::format_currency;
use crate::domain::{ListingSource, PropertyTypeFilter};
use crate::market::{fetch_market_insights, InsightsError, MarketSource};
use std::io::{self, Write};

/// Positional arguments of the report command, as typed by the user.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub suburb: Option<String>,
    pub property_type: String,
}

/// Runs the plain-text report and returns the process exit code.
///
/// The property type is checked before configuration is loaded or any source is
/// built, so a bad type always gets the list of valid options.
pub fn run_report<L, M, C, K, W, E>(
    args: ReportArgs,
    load_config: C,
    connect: K,
    listings: &L,
    out: &mut W,
    err: &mut E,
) -> i32
where
    L: ListingSource,
    M: MarketSource,
    C: FnOnce() -> Result<AppConfig, ConfigError>,
    K: FnOnce(&MarketConfig) -> Result<M, InsightsError>,
    W: Write,
    E: Write,
{
    write_report(args, load_config, connect, listings, out, err).unwrap_or(1)
}

fn write_report<L, M, C, K, W, E>(
    args: ReportArgs,
    load_config: C,
    connect: K,
    listings: &L,
    out: &mut W,
    err: &mut E,
) -> io::Result<i32>
where
    L: ListingSource,
    M: MarketSource,
    C: FnOnce() -> Result<AppConfig, ConfigError>,
    K: FnOnce(&MarketConfig) -> Result<M, InsightsError>,
    W: Write,
    E: Write,
{
    let filter = match args.property_type.parse::<PropertyTypeFilter>() {
        Ok(filter) => filter,
        Err(e) => {
            writeln!(out, "{e}")?;
            writeln!(
                out,
                "Valid options are: {}",
                PropertyTypeFilter::VALID_OPTIONS.join(", ")
            )?;
            return Ok(1);
        }
    };

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            writeln!(err, "Config load error: {e}")?;
            return Ok(1);
        }
    };
    let suburb = args.suburb.unwrap_or(config.default_suburb);

    writeln!(out, "Fetching data for {suburb} ({filter})")?;

    match listings.fetch_properties(&suburb, filter) {
        Ok(properties) => writeln!(out, "\nProperties found: {}", properties.len())?,
        Err(e) => writeln!(out, "\nProperties found: N/A ({e})")?,
    }

    let insights =
        connect(&config.market).and_then(|market| fetch_market_insights(&market, &suburb, filter));

    match insights {
        Ok(m) => {
            writeln!(out, "\nVacancy rate: {:.1}%", m.vacancy.rate)?;
            writeln!(out, "Trend: {}", m.vacancy.trend_text)?;
            writeln!(
                out,
                "\nMedian price: {}",
                format_currency(m.price.value.round() as i64)
            )?;
            writeln!(out, "Trend: {} ({:+.1}%)", m.price.trend_text, m.price.trend)?;
        }
        Err(e) => writeln!(out, "\nMarket insights unavailable: {e}")?,
    }

    Ok(0)
}
