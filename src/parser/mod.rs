pub mod api_parser;

pub use api_parser::{parse_markets, parse_news, parse_price_history, parse_trending};
