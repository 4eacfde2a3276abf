pub mod fetcher;
pub mod traits;

pub use fetcher::ScraperImpl;
pub use traits::Scraper;

use crate::config::Endpoints;
use crate::model::{CoinSummary, NewsArticle, ParserError, PricePoint, TrendingCoin};
use crate::parser;
use tracing::{info, warn};

/// The four data sources. Every getter logs failures and returns an empty list.
pub struct MarketData<S: Scraper> {
    scraper: S,
    endpoints: Endpoints,
}

impl<S: Scraper> MarketData<S> {
    pub fn new(scraper: S, endpoints: Endpoints) -> Self {
        Self { scraper, endpoints }
    }

    pub async fn get_crypto_data(&self) -> Vec<CoinSummary> {
        self.fetch_or_default("crypto data", &self.endpoints.markets, parser::parse_markets)
            .await
    }

    pub async fn get_crypto_news(&self) -> Vec<NewsArticle> {
        self.fetch_or_default("crypto news", &self.endpoints.news, parser::parse_news)
            .await
    }

    pub async fn get_trending_coins(&self) -> Vec<TrendingCoin> {
        self.fetch_or_default("trending coins", &self.endpoints.trending, parser::parse_trending)
            .await
    }

    pub async fn get_bitcoin_historical(&self) -> Vec<PricePoint> {
        self.fetch_or_default(
            "bitcoin historical data",
            &self.endpoints.bitcoin_history,
            parser::parse_price_history,
        )
        .await
    }

    async fn fetch_or_default<T, P>(&self, what: &str, url: &str, parse: P) -> Vec<T>
    where
        P: Fn(&str) -> Result<Vec<T>, ParserError>,
    {
        info!("Fetching {}...", what);
        let body = match self.scraper.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Error fetching {}: {}", what, e);
                return Vec::new();
            }
        };

        match parse(&body) {
            Ok(items) => {
                info!("Fetched {} entries of {}", items.len(), what);
                items
            }
            Err(e) => {
                warn!("Error parsing {}: {}", what, e);
                Vec::new()
            }
        }
    }
}
