//! # StockPilot Core
//!
//! Domain types and the remote API facade for the StockPilot terminal client.
//!
//! ## Overview
//!
//! This crate provides the foundational components for StockPilot:
//!
//! - **Canonical domain models** for quotes, search results, historical
//!   prices, fundamentals, news, and watchlist rows
//! - **Query facade** ([`StockApi`]) mapping UI intents onto the remote
//!   `/api/stocks` endpoints
//! - **HTTP client abstraction** so the facade can run against reqwest in
//!   production and a no-op transport in tests
//! - **Request state tracking** with a stale-response guard
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Remote API facade and error taxonomy |
//! | [`domain`] | Domain models (Symbol, ChartRange, wire records) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`request`] | Per-call async request state |
//!
//! ## Error Handling
//!
//! All fallible operations return `Result` types with structured errors.
//! Facade failures carry an [`ApiErrorKind`] so callers can distinguish
//! transport problems from bad payloads without string matching.

pub mod api;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod request;

// Re-export commonly used types at crate root for convenience

pub use api::{ApiError, ApiErrorKind, ApiHealth, StockApi, DEFAULT_NEWS_LIMIT};

pub use domain::{
    ChartRange, HistoricalPrice, NewsArticle, RiskLevel, StockAnalysis, StockFundamentals,
    StockQuote, StockSearchResult, Symbol, UtcDateTime, WatchlistItem,
};

pub use error::ValidationError;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

pub use request::{RequestSlot, RequestState, Ticket};
