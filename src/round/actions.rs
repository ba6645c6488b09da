use crate::error::RoundError;
use crate::result::{Outcome, TurnResult};
use crate::shoe::Shoe;

use super::{Round, RoundState};

/// A move the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the hand and pass to the dealer.
    Stand,
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Applies a player action.
    ///
    /// # Errors
    ///
    /// See [`Round::hit`] and [`Round::stand`].
    pub fn apply(&mut self, action: Action, shoe: &mut Shoe) -> Result<TurnResult, RoundError> {
        match action {
            Action::Hit => self.hit(shoe),
            Action::Stand => self.stand(shoe),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round in the dealer's favour. Reaching 21 does not end
    /// the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    /// The hand is unchanged in either case.
    pub fn hit(&mut self, shoe: &mut Shoe) -> Result<TurnResult, RoundError> {
        self.ensure_player_turn()?;

        let card = shoe.draw_or_reshuffle()?;
        self.player.add_card(card);
        log::debug!("player draws {card}, total {}", self.player.total());

        if self.player.is_bust() {
            self.resolve(Outcome::DealerWins);
            return Ok(TurnResult::PlayerBust);
        }

        Ok(TurnResult::Continue)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or the shoe runs out
    /// while the dealer must draw. In the latter case the round is left in
    /// [`RoundState::DealerTurn`].
    pub fn stand(&mut self, shoe: &mut Shoe) -> Result<TurnResult, RoundError> {
        self.ensure_player_turn()?;

        self.state = RoundState::DealerTurn;
        let drawn = self.dealer_play(shoe)?;
        log::debug!("dealer stands on {} after {drawn} draw(s)", self.dealer.total());

        let outcome = self.settle();
        self.resolve(outcome);
        Ok(TurnResult::DealerTurnComplete(outcome))
    }
}
