pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::model::SendOutcome;
use tracing::{info, warn};

/// Right-to-left mark prepended to every outgoing message.
pub const RTL_MARK: char = '\u{200F}';
/// Telegram's per-message limit, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

#[async_trait::async_trait]
pub trait MessageSink: Send + Sync {
    /// One delivery attempt of `text` to the configured channel.
    async fn send_message(&self, text: &str) -> SendOutcome;
}

/// What happened to one logical message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The body was too long and went out as chunks.
    Chunked { sent: usize, failed: usize },
    Dropped(String),
}

/// Sends `body` RTL-marked; an oversized body is resent as ordered chunks.
pub async fn deliver<S: MessageSink + ?Sized>(sink: &S, body: &str) -> Delivery {
    let mut text = String::with_capacity(body.len() + RTL_MARK.len_utf8());
    text.push(RTL_MARK);
    text.push_str(body);

    match sink.send_message(&text).await {
        SendOutcome::Delivered => Delivery::Sent,
        SendOutcome::Failed(reason) => {
            warn!("Error sending message: {}", reason);
            Delivery::Dropped(reason)
        }
        SendOutcome::Oversized => {
            let chunks = split_chunks(&text, MAX_MESSAGE_CHARS);
            info!("Message is too long, sending {} chunks", chunks.len());

            let (mut sent, mut failed) = (0, 0);
            for (i, chunk) in chunks.iter().enumerate() {
                match sink.send_message(chunk).await {
                    SendOutcome::Delivered => sent += 1,
                    other => {
                        warn!("Chunk {}/{} not delivered: {:?}", i + 1, chunks.len(), other);
                        failed += 1;
                    }
                }
            }
            Delivery::Chunked { sent, failed }
        }
    }
}

/// Splits `text` into pieces of at most `max_chars` characters, in order.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    if max_chars == 0 {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
