// JSON payload parsing for the market, news, trending and history APIs
use crate::model::{CoinSummary, NewsArticle, ParserError, PricePoint, TrendingCoin};
use crate::utils::parse_timestamp_millis;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MarketEntry {
    name: String,
    symbol: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(rename = "Data", default)]
    data: Vec<NewsEntry>,
}

#[derive(Debug, Deserialize)]
struct NewsEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    #[serde(default)]
    coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
struct TrendingEntry {
    item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    name: String,
    symbol: String,
    market_cap_rank: Option<u32>,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}

pub fn parse_markets(body: &str) -> Result<Vec<CoinSummary>, ParserError> {
    let entries: Vec<MarketEntry> = serde_json::from_str(body)?;
    Ok(entries
        .into_iter()
        .map(|e| CoinSummary {
            name: e.name,
            symbol: e.symbol,
            current_price: e.current_price.unwrap_or(0.0),
            price_change_24h: e.price_change_percentage_24h.unwrap_or(0.0),
        })
        .collect())
}

pub fn parse_news(body: &str) -> Result<Vec<NewsArticle>, ParserError> {
    let response: NewsResponse = serde_json::from_str(body)?;
    Ok(response
        .data
        .into_iter()
        .map(|e| NewsArticle {
            title: e.title,
            body: e.body,
            url: e.url,
        })
        .collect())
}

pub fn parse_trending(body: &str) -> Result<Vec<TrendingCoin>, ParserError> {
    let response: TrendingResponse = serde_json::from_str(body)?;
    Ok(response
        .coins
        .into_iter()
        .map(|c| TrendingCoin {
            name: c.item.name,
            symbol: c.item.symbol,
            market_cap_rank: c.item.market_cap_rank,
            score: c.item.score,
        })
        .collect())
}

pub fn parse_price_history(body: &str) -> Result<Vec<PricePoint>, ParserError> {
    let response: MarketChartResponse = serde_json::from_str(body)?;
    response
        .prices
        .into_iter()
        .map(|(millis, price)| {
            let timestamp = parse_timestamp_millis(millis)
                .ok_or_else(|| ParserError::MissingField(format!("timestamp {}", millis)))?;
            Ok(PricePoint { timestamp, price })
        })
        .collect()
}
