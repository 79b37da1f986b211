pub mod feasibility;
pub mod matching;
pub mod session;
pub mod validate;

pub use crate::domain::model::{Pairing, Participant, ParticipantRegistry, RawParticipant};
pub use crate::domain::ports::{MessageComposer, Notifier};
pub use crate::utils::error::Result;
