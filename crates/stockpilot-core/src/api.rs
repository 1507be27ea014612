//! Remote API facade.
//!
//! Thin request/response mapping onto the `/api/stocks` endpoints. The
//! facade is stateless: no retries, no caching, no deduplication of
//! concurrent identical requests. Every call issues exactly one HTTP
//! request (except the empty-query short circuit) and resolves to a typed
//! value or an [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | [`StockApi::search`] | `GET /search?query=` | `Vec<StockSearchResult>` |
//! | [`StockApi::quote`] | `GET /quote/{symbol}` | `StockQuote` |
//! | [`StockApi::historical`] | `GET /historical/{symbol}?range=` | `Vec<HistoricalPrice>` |
//! | [`StockApi::fundamentals`] | `GET /fundamentals/{symbol}` | `StockFundamentals` |
//! | [`StockApi::news`] | `GET /news/{symbol}?limit=` | `Vec<NewsArticle>` |
//! | [`StockApi::analysis`] | `GET /analysis/{symbol}?range=` | `StockAnalysis` |
//! | [`StockApi::health`] | `GET /health` | [`ApiHealth`] |

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ChartRange, HistoricalPrice, NewsArticle, StockAnalysis, StockFundamentals, StockQuote,
    StockSearchResult, Symbol,
};
use crate::http_client::{HttpClient, HttpRequest};

/// Default article count requested from the news endpoint.
///
/// The server caps the limit at 50 regardless of what the client asks for.
pub const DEFAULT_NEWS_LIMIT: usize = 10;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/stocks";

/// Facade-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network/transport failure before a response arrived.
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The body arrived but did not decode into the expected shape.
    Decode,
}

/// Structured facade error surfaced to the invoking view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
            status: None,
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status for [`ApiErrorKind::Status`] errors, `None` otherwise.
    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Transport => "api.transport",
            ApiErrorKind::Status => "api.status",
            ApiErrorKind::Decode => "api.decode",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

/// Liveness payload from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

/// Query facade over the remote stock API.
///
/// Constructed once at application start and passed by reference into the
/// views that need it.
#[derive(Clone)]
pub struct StockApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl StockApi {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http,
            timeout_ms: 3_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search instruments by symbol or company name.
    ///
    /// An empty or whitespace-only query short-circuits to an empty result
    /// without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<StockSearchResult>, ApiError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query.trim())
        );
        self.get_json(url).await
    }

    /// Fetch the latest quote for a symbol.
    pub async fn quote(&self, symbol: &Symbol) -> Result<StockQuote, ApiError> {
        let url = format!("{}/quote/{}", self.base_url, symbol);
        self.get_json(url).await
    }

    /// Fetch historical OHLCV bars over a named range.
    pub async fn historical(
        &self,
        symbol: &Symbol,
        range: ChartRange,
    ) -> Result<Vec<HistoricalPrice>, ApiError> {
        let url = format!(
            "{}/historical/{}?range={}",
            self.base_url,
            symbol,
            range.as_str()
        );
        self.get_json(url).await
    }

    /// Fetch the fundamentals snapshot for a symbol.
    pub async fn fundamentals(&self, symbol: &Symbol) -> Result<StockFundamentals, ApiError> {
        let url = format!("{}/fundamentals/{}", self.base_url, symbol);
        self.get_json(url).await
    }

    /// Fetch recent news articles for a symbol.
    pub async fn news(&self, symbol: &Symbol, limit: usize) -> Result<Vec<NewsArticle>, ApiError> {
        let url = format!("{}/news/{}?limit={}", self.base_url, symbol, limit);
        self.get_json(url).await
    }

    /// Fetch the server-computed risk/volatility summary over a range.
    pub async fn analysis(
        &self,
        symbol: &Symbol,
        range: ChartRange,
    ) -> Result<StockAnalysis, ApiError> {
        let url = format!(
            "{}/analysis/{}?range={}",
            self.base_url,
            symbol,
            range.as_str()
        );
        self.get_json(url).await
    }

    /// Check API liveness.
    pub async fn health(&self) -> Result<ApiHealth, ApiError> {
        let url = format!("{}/health", self.base_url);
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(%url, "issuing api request");

        let request = HttpRequest::get(&url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(e.message()))?;

        if !response.is_success() {
            tracing::debug!(%url, status = response.status, "api request failed");
            return Err(ApiError::status(
                response.status,
                format!("request to {url} returned status {}", response.status),
            ));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::decode(format!("malformed payload from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::NoopHttpClient;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let api = StockApi::new(
            "http://localhost:8080/api/stocks//",
            Arc::new(NoopHttpClient),
        );
        assert_eq!(api.base_url(), "http://localhost:8080/api/stocks");
    }

    #[tokio::test]
    async fn blank_search_short_circuits() {
        let api = StockApi::new(DEFAULT_BASE_URL, Arc::new(NoopHttpClient));
        let results = api.search("   ").await.expect("must not fail");
        assert!(results.is_empty());
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ApiError::transport("x").code(), "api.transport");
        assert_eq!(ApiError::status(404, "x").code(), "api.status");
        assert_eq!(ApiError::decode("x").code(), "api.decode");
        assert_eq!(ApiError::status(404, "x").http_status(), Some(404));
    }
}
