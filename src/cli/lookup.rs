//! Search and reverse command handlers
//!
//! Both go through the result callback, so output carries the zoom extent
//! the widget would receive.

use crate::cli::init_logging;
use crate::config::Config;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::format::resolve_formatter;
use crate::geocode::GeocodeClient;
use crate::search::binding::{ResultParams, SuggestResult};
use crate::search::SearchSource;
use clap::Args;
use tracing::debug;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Address to search
    pub text: String,

    /// Output format (json, text)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Output format (json, text)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the search command
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let params = ResultParams {
        suggest_result: Some(SuggestResult {
            text: args.text,
            key: None,
            source_index: 0,
        }),
        ..ResultParams::default()
    };
    resolve_and_print(&params, &args.format).await
}

/// Run the reverse command
pub async fn run_reverse(args: ReverseArgs) -> Result<()> {
    let params = ResultParams {
        location: Some(Coordinate::new(args.lon, args.lat)?),
        ..ResultParams::default()
    };
    resolve_and_print(&params, &args.format).await
}

async fn resolve_and_print(params: &ResultParams, format: &str) -> Result<()> {
    init_logging("warn");

    let config = Config::load()?;
    let formatter = resolve_formatter(format)?;
    debug!(format = formatter.name(), "Printing results");

    let client = GeocodeClient::with_base_url(&config.api.base_url)?;
    let source = SearchSource::new(client, config.search.clone());

    let results = source.get_results(params).await?;
    println!("{}", formatter.format_results(&results)?);
    Ok(())
}
