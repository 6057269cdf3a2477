//! Response schema of the exchange-info endpoint.
//!
//! Only the `symbol` field of each listed pair is of interest here; the many
//! other fields the exchange reports per entry are ignored on deserialization.
use serde::Deserialize;

/// Top-level exchange-info response: `{"symbols":[{"symbol":"..."}, ...]}`.
#[derive(Debug, Deserialize)]
pub struct ExchangeInfo {
    /// Tradable pairs listed by the exchange, in response order.
    pub symbols: Vec<SymbolInfo>,
}

/// One tradable pair entry from the exchange-info response.
#[derive(Debug, Deserialize)]
pub struct SymbolInfo {
    /// Symbol identifier of the pair (e.g., `ETHUSDT`).
    pub symbol: String,
}
