//! Round results and session scoring.

/// How a resolved round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts, player has the higher total, or a lone blackjack).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Push (tie).
    Push,
}

/// What a single step of the round engine produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The player is still to act.
    Continue,
    /// The player busted; the dealer wins without drawing.
    PlayerBust,
    /// The player was dealt a blackjack; the round is already resolved.
    PlayerBlackjack,
    /// The dealer played out their hand and the round is resolved.
    DealerTurnComplete(Outcome),
}

/// Running tally of round outcomes for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the dealer.
    pub dealer: u32,
    /// Rounds that ended in a push.
    pub pushes: u32,
}

impl Score {
    /// Records one resolved round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player += 1,
            Outcome::DealerWins => self.dealer += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.player + self.dealer + self.pushes
    }
}
