//! Push notification delivery.
//!
//! Notifications are fire-and-forget: delivery failure is logged to stderr
//! and never surfaced to the conversation.

use std::time::Duration;

const PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";

/// Shorter than the completion timeout; a slow sink must not stall a turn.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Sink for outbound one-line notifications.
pub trait Notifier: Send + Sync {
    fn push(&self, text: &str);
}

/// Delivers notifications through the Pushover messages API.
pub struct PushoverNotifier {
    token: String,
    user: String,
    http: reqwest::blocking::Client,
}

impl PushoverNotifier {
    pub fn new(token: &str, user: &str) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            token: token.to_string(),
            user: user.to_string(),
            http,
        }
    }

    /// Build from PUSHOVER_TOKEN / PUSHOVER_USER, if both are set.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("PUSHOVER_TOKEN").ok()?;
        let user = std::env::var("PUSHOVER_USER").ok()?;
        Some(Self::new(&token, &user))
    }
}

impl Notifier for PushoverNotifier {
    fn push(&self, text: &str) {
        let form = [
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("message", text),
        ];
        match self.http.post(PUSHOVER_URL).form(&form).send() {
            Ok(resp) if !resp.status().is_success() => {
                eprintln!("[notify] pushover returned {}", resp.status().as_u16());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("[notify] delivery failed: {}", e);
            }
        }
    }
}

/// Fallback when no Pushover credentials are configured: notifications go
/// to stderr so local runs still show what would have been sent.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn push(&self, text: &str) {
        eprintln!("[notify] {}", text);
    }
}
