// Analyzer module: technical indicators over the daily bitcoin series.

pub mod market_indicators;

pub use market_indicators::{IndicatorSnapshot, MarketAnalyzer};
