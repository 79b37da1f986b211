pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::mail::HttpMailer;
pub use config::ScenarioConfig;
pub use crate::core::session::{GameSession, GameSettings};
pub use domain::model::{Pairing, Participant, ParticipantRegistry, RawParticipant};
pub use utils::error::{Result, SantaError};
