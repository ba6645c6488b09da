//! Round engine and state management.

use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{Outcome, TurnResult};
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::RoundState;

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

/// One round of blackjack between a single player and the dealer.
///
/// The round owns both hands. The shoe stays with the caller and is lent to
/// every operation that draws.
#[derive(Debug, Clone)]
pub struct Round {
    player: Hand,
    dealer: Hand,
    state: RoundState,
    outcome: Option<Outcome>,
}

impl Round {
    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// If the player is dealt a blackjack the round resolves immediately,
    /// as a push when the dealer has one too.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyShoe`] if the shoe cannot supply four cards.
    /// Nothing is drawn in that case.
    pub fn deal(shoe: &mut Shoe) -> Result<Self, RoundError> {
        if shoe.available() < OPENING_CARDS {
            return Err(RoundError::EmptyShoe);
        }

        let mut round = Self {
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::PlayerTurn,
            outcome: None,
        };

        for _ in 0..2 {
            round.player.add_card(shoe.draw_or_reshuffle()?);
            round.dealer.add_card(shoe.draw_or_reshuffle()?);
        }
        log::debug!(
            "dealt player {} against dealer up card {:?}",
            round.player.total(),
            round.dealer.cards().first()
        );

        if round.player.is_blackjack() {
            let outcome = if round.dealer.is_blackjack() {
                Outcome::Push
            } else {
                Outcome::PlayerWins
            };
            round.resolve(outcome);
        }

        Ok(round)
    }

    /// Reports how the opening deal left the round.
    #[must_use]
    pub fn opening(&self) -> TurnResult {
        if self.player.is_blackjack() {
            TurnResult::PlayerBlackjack
        } else {
            TurnResult::Continue
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the round has ended.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.state == RoundState::Resolved
    }

    /// Moves both hands onto the shoe's discard pile, leaving them empty.
    pub fn discard_into(&mut self, shoe: &mut Shoe) {
        shoe.discard(self.player.take_cards());
        shoe.discard(self.dealer.take_cards());
    }

    fn resolve(&mut self, outcome: Outcome) {
        log::info!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            self.player.total(),
            self.dealer.total()
        );
        self.state = RoundState::Resolved;
        self.outcome = Some(outcome);
    }
}
