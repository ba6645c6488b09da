use core::cmp::Ordering;

use crate::error::RoundError;
use crate::options::DEALER_STANDS_ON;
use crate::result::Outcome;
use crate::shoe::Shoe;

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand: draw while below 17, then stand.
    ///
    /// Returns the number of cards drawn.
    pub(super) fn dealer_play(&mut self, shoe: &mut Shoe) -> Result<usize, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn = 0;
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = shoe.draw_or_reshuffle()?;
            self.dealer.add_card(card);
            drawn += 1;
            log::debug!("dealer draws {card}, total {}", self.dealer.total());
        }

        Ok(drawn)
    }

    /// Compares the final hands.
    ///
    /// A player bust loses even if the dealer also busts; otherwise a dealer
    /// bust loses, then the higher total wins and equal totals push.
    pub(super) fn settle(&self) -> Outcome {
        if self.player.is_bust() {
            return Outcome::DealerWins;
        }
        if self.dealer.is_bust() {
            return Outcome::PlayerWins;
        }

        match self.player.total().cmp(&self.dealer.total()) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::DealerWins,
            Ordering::Equal => Outcome::Push,
        }
    }
}
