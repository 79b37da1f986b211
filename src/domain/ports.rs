use crate::domain::model::{OutgoingMessage, Pairing};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Builds the message body a giver receives for one pairing.
pub trait MessageComposer: Send + Sync {
    fn compose(&self, pairing: &Pairing) -> String;
}

/// Outbound message transport. Errors propagate to the caller unchanged; the
/// session never retries on the transport's behalf.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<()>;
}
