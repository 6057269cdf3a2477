//! Price quote payload returned by the ticker endpoint.
//!
//! Quotes arrive as JSON bodies like `{"symbol":"BTCUSDT","price":"61234.50"}`.
//! The price is kept as the decimal string the exchange sent; round-tripping
//! it through a float would silently reformat values such as `"1.10"`.
use serde::Deserialize;

/// Current price for a single trading symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriceQuote {
    /// Symbol identifier (e.g., `BTCUSDT`).
    pub symbol: String,
    /// Price as a decimal string, verbatim from the exchange.
    pub price: String,
}
