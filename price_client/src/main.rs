//! Price Client — lists trading symbols from the exchange and concurrently
//! fetches the current price of each one, printing one `<symbol> <price>`
//! line per successful fetch.
//!
//! The run is a single fan-out/fan-in pass:
//! - one blocking call to the exchange-info endpoint; any failure there is
//!   fatal (logged, exit code 1, no retry);
//! - one worker thread per symbol fetching the ticker price, all reporting
//!   through a shared rendezvous channel;
//! - a collector loop printing quotes in completion order and logging skipped
//!   symbols. Once every worker has reported, the channel disconnects and the
//!   process exits with code 0.
//!
//! No CLI flags, config files, or environment variables are consumed;
//! `RUST_LOG` only tunes log verbosity.
#![warn(missing_docs)]
mod api;
mod fetcher;
#[cfg(test)]
mod stub;

use crate::api::ExchangeApi;
use crate::fetcher::FetchOutcome;
use log::{error, info, warn};
use price_common::net::BASE_URL;
use std::process;

fn main() {
    init_logger();

    let api = ExchangeApi::new(BASE_URL);
    let symbols = match api.list_symbols() {
        Ok(symbols) => symbols,
        Err(e) => {
            error!("Failed to list exchange symbols: {}", e);
            process::exit(1);
        }
    };
    info!("Fetching prices for {} symbols: {:?}", symbols.len(), symbols);

    let results = fetcher::spawn_fetchers(&api, symbols);
    for outcome in results {
        match outcome {
            FetchOutcome::Quote(quote) => println!("{} {}", quote.symbol, quote.price),
            FetchOutcome::Failed { symbol, error } => {
                warn!("Skipping {}: {}", symbol, error);
            }
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
