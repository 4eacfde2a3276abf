mod analyzer;
mod config;
mod dispatcher;
mod formatter;
mod model;
mod notifier;
mod parser;
mod scraper;
mod utils;

use chrono::Utc;
use config::AppConfig;
use dispatcher::{local_hour, select_route};
use notifier::TelegramNotifier;
use scraper::{MarketData, ScraperImpl};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    let hour = local_hour(Utc::now(), config.timezone);
    let Some(route) = select_route(hour) else {
        info!("Hour {} in {} has no scheduled post, nothing to do", hour, config.timezone);
        return;
    };
    info!("Hour {} in {} -> {}", hour, config.timezone, route);

    let scraper = match ScraperImpl::new() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let notifier = match TelegramNotifier::new(&config) {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to build Telegram client: {}", e);
            return;
        }
    };

    let data = MarketData::new(scraper, config.endpoints.clone());
    let posted = dispatcher::run(route, &data, &notifier).await;
    info!("Finished {}: {} message(s) posted", route, posted);
}
