use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Participant entry as it appears in raw scenario input, before validation.
///
/// `deny_unknown_fields` keeps the wire shape to exactly the two required
/// fields; anything else is rejected where the input is deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParticipant {
    pub email: String,
    #[serde(rename = "avoidGiftingTo")]
    pub avoid_gifting_to: Vec<String>,
}

/// A participant after validation: trimmed email plus the canonical set of
/// names they must never gift to. The set always contains the participant's
/// own name, so self-gifting is ruled out by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub email: String,
    pub avoid_gifting_to: BTreeSet<String>,
}

/// Canonical name -> participant mapping produced by validation. The sorted
/// map keeps iteration and display order stable; it is immutable once built.
pub type ParticipantRegistry = BTreeMap<String, Participant>;

/// One giver -> receiver assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub giver: String,
    pub receiver: String,
}

/// Message handed to a `Notifier` for delivery.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub subject: String,
    pub body: String,
    pub sender_name: String,
    pub from_addr: String,
    pub to_addr: String,
}
