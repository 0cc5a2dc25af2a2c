use crate::config::Config;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::info;

/// A single outbound channel (email, sms or push). Implementations accept
/// "send text to address" and may fail independently of each other; the
/// delivery executor treats every failure as best effort.
#[async_trait::async_trait]
pub trait IChannelSender: Send + Sync {
    async fn send(&self, address: &str, text: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    address: &'a str,
    text: &'a str,
}

/// Sends by POSTing the message to an external relay endpoint which owns
/// the actual SMTP / SMS-gateway / push-provider mechanics.
pub struct RelayChannelSender {
    client: reqwest::Client,
    url: String,
    key: String,
}

impl RelayChannelSender {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            key,
        }
    }
}

#[async_trait::async_trait]
impl IChannelSender for RelayChannelSender {
    async fn send(&self, address: &str, text: &str) -> anyhow::Result<()> {
        self.client
            .post(&self.url)
            .header("huddle-relay-key", &self.key)
            .json(&RelayMessage { address, text })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Channel that remembers what it was asked to send instead of delivering
/// anything. Used when no relay is configured and in tests that assert on
/// send counts.
#[derive(Default)]
pub struct RecordingChannelSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingChannelSender {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IChannelSender for RecordingChannelSender {
    async fn send(&self, address: &str, text: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), text.to_string()));
        Ok(())
    }
}

#[derive(Clone)]
pub struct Channels {
    pub email: Arc<dyn IChannelSender>,
    pub sms: Arc<dyn IChannelSender>,
    pub push: Arc<dyn IChannelSender>,
}

impl Channels {
    pub fn from_config(config: &Config) -> Self {
        Self {
            email: Self::sender("email", &config.email_relay_url, &config.relay_key),
            sms: Self::sender("sms", &config.sms_relay_url, &config.relay_key),
            push: Self::sender("push", &config.push_relay_url, &config.relay_key),
        }
    }

    pub fn recording() -> Self {
        Self {
            email: Arc::new(RecordingChannelSender::new()),
            sms: Arc::new(RecordingChannelSender::new()),
            push: Arc::new(RecordingChannelSender::new()),
        }
    }

    fn sender(name: &str, url: &Option<String>, key: &str) -> Arc<dyn IChannelSender> {
        match url {
            Some(url) => Arc::new(RelayChannelSender::new(url.clone(), key.to_string())),
            None => {
                info!(
                    "No relay url configured for the {} channel, messages will be dropped.",
                    name
                );
                Arc::new(RecordingChannelSender::new())
            }
        }
    }
}
