use crate::domain::model::{Pairing, ParticipantRegistry};
use rand::Rng;

/// Builds a complete assignment by randomized construction.
///
/// Givers are drawn uniformly at random from the remaining pool and matched
/// with a uniformly drawn eligible receiver. When the current giver has no
/// eligible receiver left, the partial assignment is discarded and
/// construction restarts from the full pools; a bad partial order is an
/// artifact of the draw, not of the scenario. Callers must have established
/// feasibility first; on a feasible registry the restart loop terminates with
/// probability one.
///
/// The returned pairings are sorted by giver name. The assignment itself is
/// a fresh independent draw on every call.
pub fn create_pairings<R: Rng>(registry: &ParticipantRegistry, rng: &mut R) -> Vec<Pairing> {
    let names: Vec<&str> = registry.keys().map(String::as_str).collect();

    let mut givers = names.clone();
    let mut receivers = names.clone();
    let mut pairings: Vec<Pairing> = Vec::with_capacity(names.len());

    while !givers.is_empty() {
        let giver = givers.swap_remove(rng.gen_range(0..givers.len()));
        let avoid = &registry[giver].avoid_gifting_to;

        // Dead end: everyone still in the receiver pool is avoided by the
        // current giver. Throw the partial assignment away and start over.
        if receivers.iter().all(|receiver| avoid.contains(*receiver)) {
            givers = names.clone();
            receivers = names.clone();
            pairings.clear();
            continue;
        }

        let receiver = loop {
            let index = rng.gen_range(0..receivers.len());
            if !avoid.contains(receivers[index]) {
                break receivers.swap_remove(index);
            }
        };

        pairings.push(Pairing {
            giver: giver.to_string(),
            receiver: receiver.to_string(),
        });
    }

    pairings.sort_by(|a, b| a.giver.cmp(&b.giver));
    pairings
}
