// Hour-of-day routing and the four post routines
use crate::analyzer::MarketAnalyzer;
use crate::formatter::{add_emojis, messages};
use crate::notifier::{deliver, Delivery, MessageSink};
use crate::scraper::{MarketData, Scraper};
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MarketUpdate,
    BitcoinAnalysis,
    News,
    TrendingCoins,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::MarketUpdate => "market update",
            Route::BitcoinAnalysis => "bitcoin analysis",
            Route::News => "crypto news",
            Route::TrendingCoins => "trending coins",
        };
        f.write_str(name)
    }
}

/// Inclusive hour ranges checked in order; they overlap at 12, 15, 17 and 18.
const SCHEDULE: [(u32, u32, Route); 4] = [
    (9, 12, Route::MarketUpdate),
    (12, 15, Route::BitcoinAnalysis),
    (15, 18, Route::News),
    (17, 20, Route::TrendingCoins),
];

/// First schedule entry containing `hour`, if any.
pub fn select_route(hour: u32) -> Option<Route> {
    SCHEDULE
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&hour))
        .map(|(_, _, route)| *route)
}

pub fn local_hour(now: DateTime<Utc>, tz: Tz) -> u32 {
    now.with_timezone(&tz).hour()
}

/// Runs one post routine. Returns how many messages reached the channel.
pub async fn run<S, K>(route: Route, data: &MarketData<S>, sink: &K) -> usize
where
    S: Scraper,
    K: MessageSink + ?Sized,
{
    info!("Running {}", route);
    match route {
        Route::MarketUpdate => post_market_update(data, sink).await,
        Route::BitcoinAnalysis => post_bitcoin_analysis(data, sink).await,
        Route::News => post_crypto_news(data, sink).await,
        Route::TrendingCoins => post_trending_coins(data, sink).await,
    }
}

async fn post_market_update<S: Scraper, K: MessageSink + ?Sized>(data: &MarketData<S>, sink: &K) -> usize {
    let coins = data.get_crypto_data().await;
    if coins.is_empty() {
        info!("No market data, skipping post");
        return 0;
    }
    publish(sink, &messages::market_update(&coins)).await
}

async fn post_bitcoin_analysis<S: Scraper, K: MessageSink + ?Sized>(data: &MarketData<S>, sink: &K) -> usize {
    let history = data.get_bitcoin_historical().await;
    let Some(snapshot) = MarketAnalyzer::snapshot(&history) else {
        info!("No bitcoin history, skipping analysis");
        return 0;
    };
    info!(
        "Bitcoin as of {}: price={:.2} rsi={:?} ma120={:?}",
        snapshot.as_of.format("%Y-%m-%d"), snapshot.price, snapshot.rsi, snapshot.moving_average
    );
    publish(sink, &messages::bitcoin_analysis(&snapshot)).await
}

async fn post_crypto_news<S: Scraper, K: MessageSink + ?Sized>(data: &MarketData<S>, sink: &K) -> usize {
    let news = data.get_crypto_news().await;
    if news.is_empty() {
        info!("No news articles, skipping post");
        return 0;
    }

    let mut posted = 0;
    for article in news.iter().take(messages::NEWS_LIMIT) {
        posted += publish(sink, &messages::news_article(article)).await;
    }
    posted
}

async fn post_trending_coins<S: Scraper, K: MessageSink + ?Sized>(data: &MarketData<S>, sink: &K) -> usize {
    let coins = data.get_trending_coins().await;
    if coins.is_empty() {
        info!("No trending coins, skipping post");
        return 0;
    }
    publish(sink, &messages::trending_coins(&coins)).await
}

/// Returns 1 if any part of the message reached the channel.
async fn publish<K: MessageSink + ?Sized>(sink: &K, message: &str) -> usize {
    match deliver(sink, &add_emojis(message)).await {
        Delivery::Sent => {
            info!("Message posted");
            1
        }
        Delivery::Chunked { sent: 0, failed } => {
            warn!("None of {} chunks were posted", failed);
            0
        }
        Delivery::Chunked { sent, failed } => {
            info!("Message posted in chunks: {} sent, {} failed", sent, failed);
            1
        }
        Delivery::Dropped(_) => 0,
    }
}
