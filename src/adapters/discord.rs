//! Discord webhook sharing
//!
//! Forwards user-shared text to a Discord channel webhook.

use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Discord keeps message content under 2000 chars; leave headroom
const MAX_CONTENT_CHARS: usize = 1800;

/// Discord webhook client
#[derive(Clone)]
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
}

#[derive(Serialize)]
struct DiscordMessage {
    content: String,
}

impl DiscordNotifier {
    /// Create a notifier from the environment; None when no webhook is set
    pub fn from_env() -> Option<Arc<Self>> {
        std::env::var("DISCORD_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| {
                info!("Discord sharing enabled");
                Self::new(url)
            })
    }

    /// Create a notifier with an explicit webhook URL
    pub fn new(webhook_url: String) -> Arc<Self> {
        Arc::new(Self {
            client: Client::new(),
            webhook_url,
        })
    }

    /// Send text to the webhook, truncated to Discord's practical limit
    pub async fn share(&self, text: &str) -> Result<(), String> {
        let content = truncate_chars(text, MAX_CONTENT_CHARS);
        let message = DiscordMessage {
            content: if content.is_empty() {
                "...".to_string()
            } else {
                content
            },
        };

        match self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
        {
            Ok(resp) => {
                if resp.status().is_success() {
                    debug!("Discord share delivered");
                    Ok(())
                } else {
                    let status = resp.status();
                    let body = resp.text().await.unwrap_or_default();
                    error!("Discord share failed: {} - {}", status, body);
                    Err(format!("HTTP {}: {}", status, body))
                }
            }
            Err(e) => {
                error!("Discord request failed: {}", e);
                Err(e.to_string())
            }
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_chars_not_bytes() {
        let long = "é".repeat(2000);
        let cut = truncate_chars(&long, MAX_CONTENT_CHARS);
        assert_eq!(cut.chars().count(), MAX_CONTENT_CHARS);

        assert_eq!(truncate_chars("short", MAX_CONTENT_CHARS), "short");
    }
}
