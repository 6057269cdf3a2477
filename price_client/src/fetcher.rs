//! Fan-out/fan-in price fetching.
//!
//! One worker thread per symbol issues a single ticker request and hands its
//! outcome to the collector over a rendezvous channel (`bounded(0)`, no
//! buffering — each publish blocks until the collector receives it). Every
//! worker reports exactly once, success or failure, so the channel
//! disconnecting is the signal that all fetches have finished; a failed fetch
//! can never stall the collector.
use crate::api::ExchangeApi;
use crossbeam_channel::{Receiver, bounded};
use log::error;
use price_common::{ClientError, PriceQuote};
use std::thread;

/// Outcome of one price fetch, tagged so failures still reach the collector.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch succeeded and produced a quote.
    Quote(PriceQuote),
    /// The fetch failed; the symbol is reported without a price.
    Failed {
        /// Symbol whose price could not be fetched.
        symbol: String,
        /// The failure that was logged by the worker.
        error: ClientError,
    },
}

/// Spawns one fetch worker per symbol and returns the shared result channel.
///
/// The receiver yields exactly one [`FetchOutcome`] per symbol, in completion
/// order, then disconnects once the last worker has reported. An empty symbol
/// list disconnects immediately.
pub fn spawn_fetchers(api: &ExchangeApi, symbols: Vec<String>) -> Receiver<FetchOutcome> {
    let (tx, rx) = bounded::<FetchOutcome>(0);

    for symbol in symbols {
        let api = api.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            let outcome = match api.fetch_price(&symbol) {
                Ok(quote) => FetchOutcome::Quote(quote),
                Err(e) => {
                    error!("Failed to fetch price for {}: {}", symbol, e);
                    FetchOutcome::Failed { symbol, error: e }
                }
            };
            if tx.send(outcome).is_err() {
                error!("Result channel closed before all fetches finished");
            }
        });
    }

    rx
}
