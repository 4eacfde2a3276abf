use crate::model::ConfigError;
use chrono_tz::Tz;

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHANNEL_VAR: &str = "TELEGRAM_CHANNEL_ID";

/// URLs of every external API the bot talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub markets: String,
    pub news: String,
    pub trending: String,
    pub bitcoin_history: String,
    pub telegram_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            markets: "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=10&page=1&sparkline=false".into(),
            news: "https://min-api.cryptocompare.com/data/v2/news/?lang=EN".into(),
            trending: "https://api.coingecko.com/api/v3/search/trending".into(),
            bitcoin_history: "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=120&interval=daily".into(),
            telegram_api: "https://api.telegram.org".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_channel_id: String,
    pub timezone: Tz,
    pub endpoints: Endpoints,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the two required variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        Ok(Self {
            telegram_bot_token: required(TOKEN_VAR)?,
            telegram_channel_id: required(CHANNEL_VAR)?,
            timezone: chrono_tz::Asia::Tehran,
            endpoints: Endpoints::default(),
        })
    }
}
