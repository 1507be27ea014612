//! # Domain Models
//!
//! Canonical domain types for StockPilot market data.
//!
//! ## Overview
//!
//! Strongly-typed domain models mirroring the remote API payloads. The
//! wire records are plain immutable values (the client does not reshape
//! what the API returns beyond type shape); the key types used inside the
//! client are validated at construction:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, normalized ticker symbol |
//! | [`ChartRange`] | Named historical window (1d..5y) |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//! | [`StockQuote`] | Latest price and day-change snapshot |
//! | [`StockSearchResult`] | Search hit (symbol, name, exchange) |
//! | [`HistoricalPrice`] | Dated OHLCV bar |
//! | [`StockFundamentals`] | Slow-changing company metrics |
//! | [`NewsArticle`] | Headline with source and timestamp |
//! | [`StockAnalysis`] | Volatility/drawdown/risk summary |
//! | [`WatchlistItem`] | Persisted watchlist row |
//!
//! Wire records use `camelCase` field names on the wire, matching the
//! remote API's JSON.

mod models;
mod range;
mod symbol;
mod timestamp;

pub use models::{
    HistoricalPrice, NewsArticle, RiskLevel, StockAnalysis, StockFundamentals, StockQuote,
    StockSearchResult, WatchlistItem,
};
pub use range::ChartRange;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
