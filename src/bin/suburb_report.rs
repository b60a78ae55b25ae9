//! Command-line summary of listings and market trends for one suburb.
//!
//! `suburb_report [SUBURB] [PROPERTY_TYPE]`

use clap::Parser;
use suburb_insights::config::AppConfig;
use suburb_insights::domain::MockListings;
use suburb_insights::logging::init_tracing;
use suburb_insights::market::MarketClient;
use suburb_insights::report::{run_report, ReportArgs};

#[derive(Debug, Parser)]
#[command(name = "suburb_report", about = "Print listings and market trends for a suburb")]
struct Cli {
    /// Suburb to look up. Defaults to DEFAULT_SUBURB or "Belmont North".
    suburb: Option<String>,

    /// One of: all, unit, house
    #[arg(default_value = "all")]
    property_type: String,

    // Extra positionals are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let args = ReportArgs {
        suburb: cli.suburb,
        property_type: cli.property_type,
    };

    let code = run_report(
        args,
        AppConfig::from_env,
        MarketClient::new,
        &MockListings,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
