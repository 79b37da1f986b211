use crate::domain::model::ParticipantRegistry;
use crate::utils::error::{Result, SantaError};
use std::collections::BTreeMap;

/// Proves that at least one complete assignment exists for the registry,
/// independent of any random draw.
///
/// Three static checks scan the whole registry:
/// 1. every participant has at least one eligible receiver;
/// 2. no receiver is the sole eligible option of two or more givers (a
///    matching is a bijection, so such a receiver would have to accept more
///    than one gift);
/// 3. every participant can be gifted by at least one other participant.
///
/// All three run to completion and every violating name is aggregated into a
/// single diagnostic, so one failure reports everything wrong with the
/// scenario at once.
pub fn ensure_feasible(registry: &ParticipantRegistry) -> Result<()> {
    let receiver_options: BTreeMap<&str, Vec<&str>> = registry
        .iter()
        .map(|(name, participant)| {
            let options: Vec<&str> = registry
                .keys()
                .map(String::as_str)
                .filter(|candidate| !participant.avoid_gifting_to.contains(*candidate))
                .collect();
            (name.as_str(), options)
        })
        .collect();

    let mut violations: Vec<String> = Vec::new();

    // Givers left with nobody they are allowed to gift to.
    let blocked_givers: Vec<&str> = receiver_options
        .iter()
        .filter(|(_, options)| options.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !blocked_givers.is_empty() {
        violations.push(format!(
            "cannot buy anyone a gift: {}",
            blocked_givers.join(", ")
        ));
    }

    // Receivers claimed as the only option by more than one giver.
    let mut forced_claims: BTreeMap<&str, usize> = BTreeMap::new();
    for options in receiver_options.values() {
        if let [sole_option] = options[..] {
            *forced_claims.entry(sole_option).or_default() += 1;
        }
    }

    let oversubscribed: Vec<&str> = forced_claims
        .iter()
        .filter(|(_, claims)| **claims > 1)
        .map(|(name, _)| *name)
        .collect();

    if !oversubscribed.is_empty() {
        violations.push(format!(
            "would receive more than one present: {}",
            oversubscribed.join(", ")
        ));
    }

    // Receivers nobody is able to gift to. A participant's own name is always
    // in their avoid set, so this counts the other participants only.
    let starved: Vec<&str> = registry
        .keys()
        .filter(|name| {
            registry
                .values()
                .all(|participant| participant.avoid_gifting_to.contains(*name))
        })
        .map(String::as_str)
        .collect();

    if !starved.is_empty() {
        violations.push(format!("won't receive a present: {}", starved.join(", ")));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SantaError::invalid_configuration(format!(
            "invalid scenario; {}",
            violations.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;
    use std::collections::BTreeSet;

    fn registry_from(entries: &[(&str, &[&str])]) -> ParticipantRegistry {
        entries
            .iter()
            .map(|(name, avoid)| {
                let mut avoid_set: BTreeSet<String> =
                    avoid.iter().map(|s| s.to_string()).collect();
                avoid_set.insert(name.to_string());
                (
                    name.to_string(),
                    Participant {
                        email: format!("{}@example.com", name),
                        avoid_gifting_to: avoid_set,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_accepts_unrestricted_scenario() {
        let registry = registry_from(&[("alice", &[]), ("bob", &[]), ("carol", &[])]);
        assert!(ensure_feasible(&registry).is_ok());
    }

    #[test]
    fn test_rejects_giver_with_no_options() {
        // alice avoids everyone else, so she has no eligible receiver
        let registry = registry_from(&[("alice", &["bob", "carol"]), ("bob", &[]), ("carol", &[])]);

        let err = ensure_feasible(&registry).unwrap_err();
        assert!(err.to_string().contains("cannot buy anyone a gift"));
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn test_rejects_forced_collision() {
        // alice and carol are both forced onto bob as their only option
        let registry = registry_from(&[
            ("alice", &["carol"]),
            ("bob", &[]),
            ("carol", &["alice"]),
        ]);

        let err = ensure_feasible(&registry).unwrap_err();
        assert!(err.to_string().contains("more than one present"));
        assert!(err.to_string().contains("bob"));
    }

    #[test]
    fn test_rejects_starved_receiver() {
        // everyone avoids carol, so nobody can gift to her
        let registry = registry_from(&[("alice", &["carol"]), ("bob", &["carol"]), ("carol", &[])]);

        let err = ensure_feasible(&registry).unwrap_err();
        assert!(err.to_string().contains("won't receive a present"));
        assert!(err.to_string().contains("carol"));
    }

    #[test]
    fn test_starvation_needs_every_other_participant() {
        // two of three avoid dan, but the third can still gift to him
        let registry = registry_from(&[
            ("alice", &["dan"]),
            ("bob", &["dan"]),
            ("carol", &[]),
            ("dan", &[]),
        ]);

        assert!(ensure_feasible(&registry).is_ok());
    }

    #[test]
    fn test_aggregates_all_violations_in_one_error() {
        // alice is blocked as a giver, and both alice and bob starve as
        // receivers once everyone avoids them
        let registry = registry_from(&[
            ("alice", &["bob", "carol"]),
            ("bob", &["alice"]),
            ("carol", &["alice", "bob"]),
        ]);

        let err = ensure_feasible(&registry).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cannot buy anyone a gift"));
        assert!(message.contains("won't receive a present"));
    }

    #[test]
    fn test_accepts_sole_option_without_collision() {
        // alice is forced onto bob, but nobody else is
        let registry = registry_from(&[("alice", &["carol"]), ("bob", &[]), ("carol", &[])]);
        assert!(ensure_feasible(&registry).is_ok());
    }
}
