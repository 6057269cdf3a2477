//! Shared endpoint constants used by the price client.

/// Base URL of the exchange REST API.
pub const BASE_URL: &str = "https://api.binance.com";
/// Path of the exchange-info endpoint that lists all tradable symbols.
pub const EXCHANGE_INFO_PATH: &str = "/api/v3/exchangeInfo";
/// Path of the ticker-price endpoint; takes a `symbol` query parameter.
pub const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
/// Fixed cap on how many listed symbols a run fetches prices for.
pub const SYMBOL_LIMIT: usize = 5;
