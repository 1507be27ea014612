use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Symbol, UtcDateTime, ValidationError};

/// Latest price and day-change snapshot for a symbol.
///
/// Wire record: fields beyond the headline price are optional because the
/// upstream providers do not always populate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
}

/// Instrument search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchResult {
    pub symbol: Symbol,
    pub name: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub instrument_type: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Dated OHLCV bar returned by the historical endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<u64>,
}

/// Slow-changing company financial metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockFundamentals {
    pub symbol: Symbol,
    pub name: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub fifty_two_week_high: Option<f64>,
    #[serde(default)]
    pub fifty_two_week_low: Option<f64>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Headline with source attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub url: String,
    pub source: String,
    pub published_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Risk bucket the analysis endpoint assigns from volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            other => Err(ValidationError::InvalidRiskLevel {
                value: other.to_owned(),
            }),
        }
    }
}

/// Volatility/drawdown summary computed server-side over a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysis {
    pub volatility: f64,
    pub max_drawdown: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub returns: Option<f64>,
    pub data_points: usize,
}

/// Persisted watchlist row.
///
/// The collection invariant (at most one row per symbol, insertion order)
/// is owned by the watchlist store, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub added_at: UtcDateTime,
}

impl WatchlistItem {
    /// Build a row from the fields a quote view has on hand. The store
    /// re-stamps `added_at` when the row is committed.
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("price", price)?;
        validate_finite("change", change)?;
        validate_finite("change_percent", change_percent)?;
        if price < 0.0 {
            return Err(ValidationError::NegativeValue { field: "price" });
        }

        Ok(Self {
            symbol,
            name: name.into(),
            price,
            change,
            change_percent,
            added_at: UtcDateTime::now(),
        })
    }

    /// Build a row directly from a fetched quote.
    pub fn from_quote(quote: &StockQuote) -> Result<Self, ValidationError> {
        Self::new(
            quote.symbol.clone(),
            quote.name.clone(),
            quote.price,
            quote.change,
            quote.change_percent,
        )
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_decodes_camel_case_wire_payload() {
        let payload = r#"{
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "price": 150.0,
            "change": 2.5,
            "changePercent": 1.69,
            "volume": 51230000,
            "previousClose": 147.5,
            "exchange": "NASDAQ"
        }"#;

        let quote: StockQuote = serde_json::from_str(payload).expect("must decode");
        assert_eq!(quote.symbol.as_str(), "AAPL");
        assert_eq!(quote.change_percent, 1.69);
        assert_eq!(quote.previous_close, Some(147.5));
        assert_eq!(quote.open, None);
    }

    #[test]
    fn analysis_decodes_risk_level() {
        let payload = r#"{
            "volatility": 0.32,
            "maxDrawdown": -0.18,
            "riskLevel": "MEDIUM",
            "returns": 0.12,
            "dataPoints": 252
        }"#;

        let analysis: StockAnalysis = serde_json::from_str(payload).expect("must decode");
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.data_points, 252);
    }

    #[test]
    fn watchlist_item_rejects_negative_price() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let err =
            WatchlistItem::new(symbol, "Apple Inc.", -1.0, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { .. }));
    }

    #[test]
    fn watchlist_item_from_quote_copies_headline_fields() {
        let payload = r#"{
            "symbol": "MSFT",
            "name": "Microsoft Corporation",
            "price": 410.2,
            "change": -1.1,
            "changePercent": -0.27
        }"#;
        let quote: StockQuote = serde_json::from_str(payload).expect("must decode");

        let item = WatchlistItem::from_quote(&quote).expect("must build");
        assert_eq!(item.symbol.as_str(), "MSFT");
        assert_eq!(item.price, 410.2);
    }
}
