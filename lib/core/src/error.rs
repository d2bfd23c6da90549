//! Error handling foundation for nodebird.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types and reports
//! them through `Report<C>` as they propagate.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
