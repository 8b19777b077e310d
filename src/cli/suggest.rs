//! Suggest command handler
//!
//! Prints what the search widget would show while the user types.

use crate::cli::init_logging;
use crate::config::Config;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::format::resolve_formatter;
use crate::geocode::GeocodeClient;
use crate::search::binding::SuggestParams;
use crate::search::SearchSource;
use clap::Args;
use tracing::debug;

/// Suggest command arguments
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial address as typed
    pub text: String,

    /// View center longitude used as proximity bias
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// View center latitude used as proximity bias
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Output format (json, text)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the suggest command
pub async fn run(args: SuggestArgs) -> Result<()> {
    init_logging("warn");

    let config = Config::load()?;

    let formatter = resolve_formatter(&args.format)?;
    debug!(format = formatter.name(), "Printing suggestions");

    let view_center = match (args.lon, args.lat) {
        (Some(lon), Some(lat)) => Coordinate::new(lon, lat)?,
        _ => config.map.center()?,
    };

    let client = GeocodeClient::with_base_url(&config.api.base_url)?;
    let source = SearchSource::new(client, config.search.clone());

    let params = SuggestParams {
        suggest_term: args.text,
        source_index: 0,
    };
    let suggestions = source.get_suggestions(&params, view_center).await?;

    println!("{}", formatter.format_suggestions(&suggestions)?);
    Ok(())
}
