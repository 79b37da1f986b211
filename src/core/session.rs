use crate::core::{feasibility, matching, validate};
use crate::domain::model::{OutgoingMessage, Pairing, ParticipantRegistry, RawParticipant};
use crate::domain::ports::{MessageComposer, Notifier};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Session-level settings. Opaque to the matching core; only the
/// notification path reads them.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Display name used as the sender identity.
    pub name: String,
    /// Present budget, quoted in the default message body.
    pub budget: f64,
    /// Subject line for notification messages.
    pub subject: String,
    /// Address messages are sent from.
    pub sender: String,
}

/// Default composer: greets the giver, names their receiver and quotes the
/// budget.
pub struct BudgetComposer {
    budget: f64,
}

impl BudgetComposer {
    pub fn new(budget: f64) -> Self {
        Self { budget }
    }
}

impl MessageComposer for BudgetComposer {
    fn compose(&self, pairing: &Pairing) -> String {
        format!(
            "Hello, {}! You are {}'s Secret Santa this year. \
             Remember that the maximum budget is ${}. \
             Happy shopping and merry Christmas :)",
            pairing.giver, pairing.receiver, self.budget
        )
    }
}

/// One Secret Santa game: a validated participant registry plus the settings
/// needed to notify givers.
///
/// Construction validates the raw data and proves the scenario feasible, so a
/// successfully built session is guaranteed to produce a matching on every
/// draw. The registry is immutable for the session's lifetime; each draw
/// allocates its own working state and draws are independent of each other.
pub struct GameSession {
    settings: GameSettings,
    registry: ParticipantRegistry,
    composer: Box<dyn MessageComposer>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("composer", &"<dyn MessageComposer>")
            .finish()
    }
}

impl GameSession {
    /// Validates and normalizes `participants`, proves the scenario feasible
    /// and builds a session with the default message composer.
    pub fn new(
        settings: GameSettings,
        participants: HashMap<String, RawParticipant>,
    ) -> Result<Self> {
        let registry = validate::build_registry(participants)?;
        feasibility::ensure_feasible(&registry)?;

        let composer = Box::new(BudgetComposer::new(settings.budget));

        Ok(Self {
            settings,
            registry,
            composer,
        })
    }

    /// Replaces the default message composer.
    pub fn with_composer(mut self, composer: Box<dyn MessageComposer>) -> Self {
        self.composer = composer;
        self
    }

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    /// Draws a fresh matching without notifying anyone. Pairings are logged
    /// unless `silent` is set.
    pub fn dry_run(&self, silent: bool) -> Vec<Pairing> {
        self.dry_run_with(&mut StdRng::from_entropy(), silent)
    }

    /// `dry_run` with a caller-supplied randomness source, for deterministic
    /// draws.
    pub fn dry_run_with<R: Rng>(&self, rng: &mut R, silent: bool) -> Vec<Pairing> {
        let pairings = matching::create_pairings(&self.registry, rng);

        if !silent {
            for pairing in &pairings {
                tracing::info!("{} gifts to {}", pairing.giver, pairing.receiver);
            }
        }

        pairings
    }

    /// Draws a fresh matching and sends each giver a message naming their
    /// receiver. Transport errors propagate unchanged; no retry happens here.
    pub async fn play<N: Notifier>(&self, notifier: &N, silent: bool) -> Result<Vec<Pairing>> {
        self.play_with(&mut StdRng::from_entropy(), notifier, silent)
            .await
    }

    /// `play` with a caller-supplied randomness source.
    pub async fn play_with<R: Rng, N: Notifier>(
        &self,
        rng: &mut R,
        notifier: &N,
        silent: bool,
    ) -> Result<Vec<Pairing>> {
        let pairings = self.dry_run_with(rng, silent);

        for pairing in &pairings {
            let giver = &self.registry[&pairing.giver];

            let message = OutgoingMessage {
                subject: self.settings.subject.clone(),
                body: self.composer.compose(pairing),
                sender_name: self.settings.name.clone(),
                from_addr: self.settings.sender.clone(),
                to_addr: giver.email.clone(),
            };

            notifier.send(&message).await?;

            if !silent {
                tracing::info!("Notification sent to {} ({})", giver.email, pairing.giver);
            }
        }

        Ok(pairings)
    }
}
