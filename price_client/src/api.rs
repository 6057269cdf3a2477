//! HTTP access to the exchange REST API.
//!
//! `ExchangeApi` wraps a blocking `reqwest` client together with the API base
//! URL. Both endpoints follow the same shape: issue a GET, require exactly
//! 200 OK, decode the JSON body. Bodies are decoded from text with
//! `serde_json` so schema mismatches surface as `ClientError::Decode` rather
//! than a panic or an opaque transport error.
use log::debug;
use price_common::net::{EXCHANGE_INFO_PATH, SYMBOL_LIMIT, TICKER_PRICE_PATH};
use price_common::symbols::ExchangeInfo;
use price_common::{ClientError, PriceQuote, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;

/// Client for the two exchange endpoints used by a run.
///
/// Cloning is cheap (the underlying connection pool is shared), which lets
/// each fetch worker own its own handle.
#[derive(Debug, Clone)]
pub struct ExchangeApi {
    client: Client,
    base_url: String,
}

impl ExchangeApi {
    /// Creates a new API client against `base_url` (scheme and host, no
    /// trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        ExchangeApi {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Lists tradable symbols, capped at the first [`SYMBOL_LIMIT`] entries in
    /// response order.
    ///
    /// An exchange reporting fewer entries yields all of them; an empty
    /// listing yields an empty vector, not an error.
    pub fn list_symbols(&self) -> Result<Vec<String>> {
        let url = format!("{}{}", self.base_url, EXCHANGE_INFO_PATH);
        let body = self.get_ok(&url, EXCHANGE_INFO_PATH)?;
        let info: ExchangeInfo = serde_json::from_str(&body)?;

        let mut symbols: Vec<String> = info.symbols.into_iter().map(|s| s.symbol).collect();
        symbols.truncate(SYMBOL_LIMIT);
        Ok(symbols)
    }

    /// Fetches the current price for `symbol` from the ticker endpoint.
    pub fn fetch_price(&self, symbol: &str) -> Result<PriceQuote> {
        let url = format!("{}{}?symbol={}", self.base_url, TICKER_PRICE_PATH, symbol);
        let body = self.get_ok(&url, TICKER_PRICE_PATH)?;
        let quote: PriceQuote = serde_json::from_str(&body)?;
        Ok(quote)
    }

    /// Issues a GET to `url`, requires an exact 200 OK, and returns the body.
    fn get_ok(&self, url: &str, endpoint: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}
