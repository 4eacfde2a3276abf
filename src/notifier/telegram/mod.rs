pub mod sender;

use crate::config::AppConfig;
use crate::model::{NotifyError, SendOutcome};
use crate::notifier::MessageSink;
use reqwest::Client;

pub struct TelegramNotifier {
    pub api_base: String,
    pub bot_token: String,
    pub channel_id: String,
    pub client: Client,
}

impl TelegramNotifier {
    pub fn new(config: &AppConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            api_base: config.endpoints.telegram_api.trim_end_matches('/').to_string(),
            bot_token: config.telegram_bot_token.clone(),
            channel_id: config.telegram_channel_id.clone(),
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }
}

#[async_trait::async_trait]
impl MessageSink for TelegramNotifier {
    async fn send_message(&self, text: &str) -> SendOutcome {
        sender::send_text(self, text).await
    }
}
