//!
//! Common types and utilities shared across the price client workspace.
//!
//! This crate aggregates:
//! - `error` — unified error type `ClientError` used across the workspace.
//! - `result` — handy `Result<T, ClientError>` alias.
//! - `quote` — price quote payload returned by the ticker endpoint.
//! - `symbols` — response schema of the exchange-info endpoint.
//! - `net` — endpoint URLs and limits.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;
pub mod symbols;

pub use error::ClientError;
pub use quote::PriceQuote;
pub use result::Result;
