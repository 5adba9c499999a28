use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Playing,
    Complete,
}

impl RoundState {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Cards currently flipped and awaiting evaluation, never more than two.
pub type Selection = SmallVec<[CardId; 2]>;

/// Read-only copy of a round, handed to renderers after every change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: RoundId,
    pub cards: Vec<Card>,
    pub selection: Vec<CardId>,
    pub is_complete: bool,
    pub is_awaiting_resolution: bool,
}

/// Turn and match state machine for a single round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    round: RoundId,
    cards: Vec<Card>,
    pair_count: PairCount,
    selection: Selection,
    matched_pairs: PairCount,
    state: RoundState,
    mismatch_delay: Duration,
}

impl PlayEngine {
    pub fn new(round: RoundId, deck: Deck, mismatch_delay: Duration) -> Self {
        let pair_count = deck.pair_count();
        Self {
            round,
            cards: deck.into_cards(),
            pair_count,
            selection: Selection::new(),
            matched_pairs: 0,
            state: Default::default(),
            mismatch_delay,
        }
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(usize::from(id))
    }

    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Two cards are face up and no selection is accepted until they are resolved.
    pub fn is_awaiting_resolution(&self) -> bool {
        self.selection.len() == 2
    }

    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.matched_pairs
    }

    pub fn can_select(&self, id: CardId) -> bool {
        if self.is_complete() || self.is_awaiting_resolution() {
            return false;
        }

        self.card(id).is_some_and(|card| !card.is_face_up())
    }

    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        use SelectOutcome::*;

        if !self.can_select(id) {
            log::trace!("selection of card {} ignored", id);
            return NoChange;
        }

        self.cards[usize::from(id)].revealed = true;
        self.selection.push(id);

        if self.selection.len() < 2 {
            return Revealed;
        }

        let (first, second) = (self.selection[0], self.selection[1]);
        self.resolve_pair(first, second)
    }

    /// Flips a mismatched pair back once its delay has elapsed.
    ///
    /// Tickets issued for another round or another pair do nothing.
    pub fn resolve_mismatch(&mut self, ticket: MismatchTicket) -> ResolveOutcome {
        if ticket.round != self.round || self.selection[..] != [ticket.first, ticket.second] {
            log::debug!("stale mismatch ticket ignored: {:?}", ticket);
            return ResolveOutcome::NoChange;
        }

        for id in [ticket.first, ticket.second] {
            self.cards[usize::from(id)].revealed = false;
        }
        self.selection.clear();
        log::debug!("cards {} and {} flipped back", ticket.first, ticket.second);
        ResolveOutcome::FlippedBack
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            cards: self.cards.clone(),
            selection: self.selection.to_vec(),
            is_complete: self.is_complete(),
            is_awaiting_resolution: self.is_awaiting_resolution(),
        }
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        let first_symbol = self.cards[usize::from(first)].symbol;
        let second_symbol = self.cards[usize::from(second)].symbol;

        if first_symbol != second_symbol {
            log::debug!("cards {} and {} do not match", first, second);
            return SelectOutcome::Mismatched(MismatchTicket {
                round: self.round,
                first,
                second,
                delay: self.mismatch_delay,
            });
        }

        for id in [first, second] {
            self.cards[usize::from(id)].matched = true;
        }
        self.selection.clear();
        self.matched_pairs += 1;
        log::debug!("cards {} and {} matched", first, second);

        if self.check_complete() {
            SelectOutcome::Completed
        } else {
            SelectOutcome::Matched
        }
    }

    fn check_complete(&mut self) -> bool {
        if self.cards.iter().all(|card| card.matched) {
            if !self.state.is_complete() {
                log::debug!("round {} complete", self.round);
            }
            self.state = RoundState::Complete;
            true
        } else {
            false
        }
    }
}
