//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `ClientError`, so functions can simply return `Result<T>`.
use crate::error::ClientError;

/// Workspace-wide `Result` alias with `ClientError` as the default error.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
