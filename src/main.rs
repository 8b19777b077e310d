//! adresse-search CLI entry point
//!
//! Address search client - CLI + web API

use adresse_search::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
