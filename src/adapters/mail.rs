use crate::domain::model::OutgoingMessage;
use crate::domain::ports::Notifier;
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// JSON payload accepted by the gateway's send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    subject: &'a str,
    body: &'a str,
    from_name: &'a str,
    from: &'a str,
    to: &'a str,
}

/// Notifier that delivers messages through an HTTP mail gateway.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpMailer {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl Notifier for HttpMailer {
    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let payload = SendRequest {
            subject: &message.subject,
            body: &message.body,
            from_name: &message.sender_name,
            from: &message.from_addr,
            to: &message.to_addr,
        };

        tracing::debug!("Posting message for {} to {}", message.to_addr, self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SantaError::DeliveryRejected {
                recipient: message.to_addr.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
