//! Command dispatch for an interactive game.

use crate::command::Command;
use crate::error::RoundError;
use crate::options::SessionOptions;
use crate::result::{Score, TurnResult};
use crate::round::{Action, Round};
use crate::shoe::Shoe;

/// What the shell should tell the player after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The round engine handled a hit or stand.
    Turn(TurnResult),
    /// A new round was dealt.
    Dealt(TurnResult),
    /// Hit or stand arrived after the round ended.
    RoundOver,
    /// A new round was requested while one is still being played.
    RoundInProgress,
    /// The player declined mid-round; declining again leaves.
    ConfirmExit,
    /// Help was requested.
    Help,
    /// The session is over.
    Exit(Score),
}

/// A single-player blackjack session: one shoe, the current round and a score.
#[derive(Debug, Clone)]
pub struct Session {
    shoe: Shoe,
    round: Round,
    score: Score,
    /// Set after a mid-round `no`.
    quitting: bool,
}

impl Session {
    /// Creates a session from options and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe cannot supply the opening deal.
    pub fn new(options: SessionOptions) -> Result<Self, RoundError> {
        Self::with_shoe(Shoe::new(options.decks, options.resolved_seed()))
    }

    /// Creates a session around an existing shoe and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe cannot supply the opening deal.
    pub fn with_shoe(mut shoe: Shoe) -> Result<Self, RoundError> {
        let round = Round::deal(&mut shoe)?;
        let mut session = Self {
            shoe,
            round,
            score: Score::default(),
            quitting: false,
        };
        session.record_if_resolved();
        Ok(session)
    }

    /// Runs one command.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyShoe`] if the shoe runs out mid-round or
    /// cannot supply a new deal. A failed deal leaves the previous round in
    /// place, still resolved, with its cards already on the discard pile.
    pub fn execute(&mut self, command: Command) -> Result<Reply, RoundError> {
        if command != Command::Decline {
            self.quitting = false;
        }

        match command {
            Command::Hit => self.play(Action::Hit),
            Command::Stand => self.play(Action::Stand),
            Command::Deal => self.deal(),
            Command::Decline => Ok(self.decline()),
            Command::Help => Ok(Reply::Help),
            Command::Exit => Ok(Reply::Exit(self.score)),
        }
    }

    /// Returns the current (or just finished) round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns whether a round is waiting on the player.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.round.is_resolved()
    }

    fn play(&mut self, action: Action) -> Result<Reply, RoundError> {
        if !self.is_playing() {
            return Ok(Reply::RoundOver);
        }

        let result = self.round.apply(action, &mut self.shoe)?;
        self.record_if_resolved();
        Ok(Reply::Turn(result))
    }

    fn deal(&mut self) -> Result<Reply, RoundError> {
        if self.is_playing() {
            return Ok(Reply::RoundInProgress);
        }

        self.round.discard_into(&mut self.shoe);
        self.round = Round::deal(&mut self.shoe)?;
        self.record_if_resolved();
        Ok(Reply::Dealt(self.round.opening()))
    }

    fn decline(&mut self) -> Reply {
        if !self.is_playing() || self.quitting {
            return Reply::Exit(self.score);
        }
        self.quitting = true;
        Reply::ConfirmExit
    }

    fn record_if_resolved(&mut self) {
        if let Some(outcome) = self.round.outcome() {
            self.score.record(outcome);
        }
    }
}
