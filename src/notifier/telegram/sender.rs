// notifier/telegram/sender.rs

use crate::model::{NotifyError, SendOutcome};
use crate::notifier::telegram::TelegramNotifier;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends an HTML text message to the channel and classifies the result.
pub async fn send_text(notifier: &TelegramNotifier, text: &str) -> SendOutcome {
    match post_message(notifier, text).await {
        Ok(()) => {
            info!("✅ Telegram message sent ({} chars)", text.chars().count());
            SendOutcome::Delivered
        }
        Err(NotifyError::Api { description, .. }) if is_too_long(&description) => {
            warn!("❌ Telegram rejected message as too long: {}", description);
            SendOutcome::Oversized
        }
        Err(e) => {
            warn!("❌ Telegram send failed: {}", e);
            SendOutcome::Failed(e.to_string())
        }
    }
}

async fn post_message(notifier: &TelegramNotifier, text: &str) -> Result<(), NotifyError> {
    let url = notifier.method_url("sendMessage");
    let params = [
        ("chat_id", notifier.channel_id.as_str()),
        ("text", text),
        ("parse_mode", "HTML"),
    ];

    let response = notifier.client.post(&url).form(&params).send().await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());

    let parsed = serde_json::from_str::<TelegramApiResponse>(&body).ok();
    if status.is_success() && parsed.as_ref().is_none_or(|r| r.ok) {
        return Ok(());
    }

    let description = parsed
        .and_then(|r| r.description)
        .unwrap_or(body);
    Err(NotifyError::Api {
        status: status.as_u16(),
        description,
    })
}

fn is_too_long(description: &str) -> bool {
    description.to_lowercase().contains("message is too long")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Endpoints};
    use mockito::Matcher;

    fn notifier_for(base: &str) -> TelegramNotifier {
        let config = AppConfig {
            telegram_bot_token: "TOKEN".into(),
            telegram_channel_id: "@channel".into(),
            timezone: chrono_tz::Asia::Tehran,
            endpoints: Endpoints {
                telegram_api: base.to_string(),
                ..Endpoints::default()
            },
        };
        TelegramNotifier::new(&config).unwrap()
    }

    #[tokio::test]
    async fn successful_send_is_delivered() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("chat_id".into(), "@channel".into()),
                Matcher::UrlEncoded("parse_mode".into(), "HTML".into()),
                Matcher::UrlEncoded("text".into(), "<b>hi</b>".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true,"result":{"message_id":1}}"#)
            .create_async()
            .await;

        let outcome = send_text(&notifier_for(&server.url()), "<b>hi</b>").await;
        assert_eq!(outcome, SendOutcome::Delivered);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn too_long_error_is_oversized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: message is too long"}"#)
            .create_async()
            .await;

        let outcome = send_text(&notifier_for(&server.url()), "long").await;
        assert_eq!(outcome, SendOutcome::Oversized);
    }

    #[tokio::test]
    async fn other_api_errors_are_failures() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        match send_text(&notifier_for(&server.url()), "hi").await {
            SendOutcome::Failed(reason) => assert!(reason.contains("chat not found")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn too_long_match_ignores_case() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: Message is too long"}"#)
            .create_async()
            .await;

        let outcome = send_text(&notifier_for(&server.url()), "long").await;
        assert_eq!(outcome, SendOutcome::Oversized);
    }
}
