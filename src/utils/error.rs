use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    /// Structurally malformed participant data, or a scenario whose
    /// restrictions make a complete assignment impossible. Always raised
    /// before any pairing attempt.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Notification transport failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Mail gateway rejected message for {recipient}: HTTP {status}")]
    DeliveryRejected { recipient: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SantaError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
