use serde::Serialize;

use crate::*;

/// A sequence of rounds played with the same configuration.
///
/// Starting a new round replaces the [`PlayEngine`] wholesale, so selections and
/// mismatch tickets from the previous round can never touch the new one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    config: GameConfig,
    engine: PlayEngine,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let engine = Self::deal(&config, 0, seed);
        Self { config, engine }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        self.engine.select(id)
    }

    pub fn resolve_mismatch(&mut self, ticket: MismatchTicket) -> ResolveOutcome {
        self.engine.resolve_mismatch(ticket)
    }

    /// Throws away the current round, pending flip-back included, and deals a new one.
    pub fn reset(&mut self, seed: u64) {
        let next_round = self.engine.round().wrapping_add(1);
        self.engine = Self::deal(&self.config, next_round, seed);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    fn deal(config: &GameConfig, round: RoundId, seed: u64) -> PlayEngine {
        log::debug!("dealing round {}", round);
        let deck = RandomDeckGenerator::new(seed).generate(&config.alphabet);
        PlayEngine::new(round, deck, config.mismatch_delay)
    }
}
