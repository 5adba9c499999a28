#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use alphabet::*;
pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod alphabet;
mod card;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Tunables of a game: the symbols to deal and how long a mismatched pair stays face up.
///
/// Deserializing goes through [`GameConfig::new`], so the delay is clamped either way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGameConfig")]
pub struct GameConfig {
    pub alphabet: Alphabet,
    pub mismatch_delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);
    pub const MAX_MISMATCH_DELAY: Duration = Duration::from_millis(10_000);

    pub fn new(alphabet: Alphabet, mismatch_delay: Duration) -> Self {
        if mismatch_delay > Self::MAX_MISMATCH_DELAY {
            log::warn!(
                "Mismatch delay clamped, requested {:?} but max is {:?}",
                mismatch_delay,
                Self::MAX_MISMATCH_DELAY
            );
        }
        let mismatch_delay = mismatch_delay.min(Self::MAX_MISMATCH_DELAY);
        Self {
            alphabet,
            mismatch_delay,
        }
    }

    /// Default configuration using only the first `pairs` symbols.
    pub fn with_pairs(pairs: PairCount) -> Self {
        Self::new(
            Alphabet::default().truncated(pairs),
            Self::DEFAULT_MISMATCH_DELAY,
        )
    }

    pub fn pair_count(&self) -> PairCount {
        self.alphabet.len()
    }

    pub fn total_cards(&self) -> CardCount {
        pair_cards(self.pair_count())
    }

    pub fn mismatch_delay_millis(&self) -> u32 {
        self.mismatch_delay.as_millis().try_into().unwrap_or(u32::MAX)
    }
}

#[derive(Deserialize)]
struct RawGameConfig {
    alphabet: Alphabet,
    mismatch_delay: Duration,
}

impl From<RawGameConfig> for GameConfig {
    fn from(raw: RawGameConfig) -> Self {
        Self::new(raw.alphabet, raw.mismatch_delay)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Alphabet::default(), Self::DEFAULT_MISMATCH_DELAY)
    }
}

/// Handle for one pending flip-back, handed out when two selected cards differ.
///
/// Whoever schedules the delayed flip-back gives the ticket back to
/// [`PlayEngine::resolve_mismatch`] once `delay` has passed. Tickets are bound to
/// the round they were issued for, so a ticket outliving its round is inert.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchTicket {
    pub round: RoundId,
    pub first: CardId,
    pub second: CardId,
    pub delay: Duration,
}

/// Result of selecting a card.
///
/// A second selection resolves the pair right away: equal symbols give `Matched`
/// (or `Completed` for the last pair), different ones give `Mismatched` with the
/// ticket for the delayed flip-back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Revealed,
    Matched,
    Completed,
    Mismatched(MismatchTicket),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Matched => true,
            Completed => true,
            Mismatched(_) => true,
        }
    }

    pub const fn mismatch(self) -> Option<MismatchTicket> {
        match self {
            Self::Mismatched(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// Result of handing a [`MismatchTicket`] back, `NoChange` for stale tickets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    NoChange,
    FlippedBack,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::FlippedBack => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_eight_pairs_and_one_second_delay() {
        let config = GameConfig::default();

        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.total_cards(), 16);
        assert_eq!(config.mismatch_delay_millis(), 1000);
    }

    #[test]
    fn mismatch_delay_is_clamped() {
        let config = GameConfig::new(Alphabet::default(), Duration::from_secs(3600));

        assert_eq!(config.mismatch_delay, GameConfig::MAX_MISMATCH_DELAY);
    }

    #[test]
    fn deserialized_mismatch_delay_is_clamped() {
        let config: GameConfig = serde_json::from_str(
            r#"{"alphabet":["A","B"],"mismatch_delay":{"secs":3600,"nanos":0}}"#,
        )
        .unwrap();

        assert_eq!(config.mismatch_delay, GameConfig::MAX_MISMATCH_DELAY);
        assert_eq!(config.pair_count(), 2);
    }

    #[test]
    fn config_survives_serde_round_trip() {
        let config = GameConfig::new(Alphabet::default(), Duration::from_millis(250));
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn with_pairs_truncates_default_alphabet() {
        assert_eq!(GameConfig::with_pairs(3).pair_count(), 3);
        assert_eq!(GameConfig::with_pairs(0).pair_count(), 1);
        assert_eq!(GameConfig::with_pairs(100).pair_count(), 8);
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!SelectOutcome::NoChange.has_update());
        assert!(SelectOutcome::Revealed.has_update());
        assert!(!ResolveOutcome::NoChange.has_update());
        assert!(ResolveOutcome::FlippedBack.has_update());
    }
}
