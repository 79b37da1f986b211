use crate::domain::model::{Participant, ParticipantRegistry, RawParticipant};
use crate::utils::error::{Result, SantaError};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Minimum number of entries for a drawable scenario.
const MIN_PARTICIPANTS: usize = 2;

/// Checks structural well-formedness of raw participant data and normalizes
/// it into a canonical registry.
///
/// Rules are applied in order, failing fast on the first violation:
/// names must be non-empty after trimming (and stay unique once trimmed),
/// at least two participants are required, and every email must be non-empty
/// after trimming. Surviving entries are then sanitized: the participant's
/// own name joins their avoid set, avoid entries are trimmed, empty entries
/// are dropped, and names that match no participant are dropped with a
/// warning rather than an error.
pub fn build_registry(raw: HashMap<String, RawParticipant>) -> Result<ParticipantRegistry> {
    let mut trimmed: BTreeMap<String, RawParticipant> = BTreeMap::new();

    for (name, attrs) in raw {
        let key = name.trim();

        if key.is_empty() {
            return Err(SantaError::invalid_configuration(
                "participant names must be non-empty strings",
            ));
        }

        if trimmed.insert(key.to_string(), attrs).is_some() {
            return Err(SantaError::invalid_configuration(format!(
                "participant {:?} appears more than once after trimming",
                key
            )));
        }
    }

    if trimmed.len() < MIN_PARTICIPANTS {
        return Err(SantaError::invalid_configuration(
            "at least two participants are required",
        ));
    }

    let known: BTreeSet<String> = trimmed.keys().cloned().collect();
    let mut registry = ParticipantRegistry::new();

    for (name, attrs) in trimmed {
        let email = attrs.email.trim().to_string();

        if email.is_empty() {
            return Err(SantaError::invalid_configuration(format!(
                "participant {:?} must have a non-empty email",
                name
            )));
        }

        let participant = sanitize(&name, email, attrs.avoid_gifting_to, &known);
        registry.insert(name, participant);
    }

    Ok(registry)
}

fn sanitize(
    name: &str,
    email: String,
    avoid_gifting_to: Vec<String>,
    known: &BTreeSet<String>,
) -> Participant {
    let mut avoid: BTreeSet<String> = avoid_gifting_to
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    // Nobody gifts to themselves.
    avoid.insert(name.to_string());

    let (kept, ignored): (BTreeSet<String>, BTreeSet<String>) =
        avoid.into_iter().partition(|entry| known.contains(entry));

    if !ignored.is_empty() {
        tracing::warn!(
            "Ignored names {:?} in the list of people avoided by {}",
            ignored,
            name
        );
    }

    Participant {
        email,
        avoid_gifting_to: kept,
    }
}
