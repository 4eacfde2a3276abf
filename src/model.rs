// Core structs: CoinSummary, NewsArticle, TrendingCoin, PricePoint
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CoinSummary {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub price_change_24h: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub body: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCoin {
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Result of a single `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    /// Telegram rejected the body as longer than its limit.
    Oversized,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is missing or empty")]
    MissingVar(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing field: {0}")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("telegram api error [{status}]: {description}")]
    Api { status: u16, description: String },
}
