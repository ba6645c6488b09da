//! The shoe: draw pile, discard pile and shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card, DECK_SIZE};
use crate::error::ShoeError;

/// The pool of undealt cards for a session, plus the cards already played.
///
/// Cards are dealt from the top of the draw pile. Finished hands go to the
/// discard pile, which is shuffled back in once the draw pile runs dry, so no
/// card is dealt twice between reshuffles.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Undealt cards; the next card is at the end.
    cards: Vec<Card>,
    /// Cards from finished rounds.
    discards: Vec<Card>,
    /// Number of 52-card decks in a full shoe.
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a full, shuffled shoe with the given number of decks.
    ///
    /// A deck count of zero is treated as one.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            discards: Vec::new(),
            decks: decks.max(1),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        shoe
    }

    /// Creates a shoe that deals `draws` in order, first element first.
    ///
    /// Useful for replaying a known sequence. Reshuffles still use `seed`.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            discards: Vec::new(),
            decks: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Refills the shoe with every deck, clears the discards and shuffles.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.discards.clear();
        self.cards.reserve(self.decks as usize * DECK_SIZE);
        for _ in 0..self.decks {
            self.cards.extend(card::deck());
        }
        self.cards.shuffle(&mut self.rng);
        log::debug!("shuffled a fresh shoe of {} cards", self.cards.len());
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the draw pile is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Draws the next card, shuffling the discards back in first if the draw
    /// pile is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if both piles are empty.
    pub fn draw_or_reshuffle(&mut self) -> Result<Card, ShoeError> {
        if self.cards.is_empty() {
            self.reshuffle_discards();
        }
        self.draw()
    }

    /// Moves the discard pile under the remaining cards and shuffles.
    ///
    /// Returns `true` if any discards were moved.
    pub fn reshuffle_discards(&mut self) -> bool {
        if self.discards.is_empty() {
            return false;
        }
        let moved = self.discards.len();
        self.cards.append(&mut self.discards);
        self.cards.shuffle(&mut self.rng);
        log::info!("reshuffled {moved} discards into the shoe");
        true
    }

    /// Puts played cards on the discard pile.
    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discards.extend(cards);
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards on the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discards.len()
    }

    /// Returns the number of cards that can still be dealt, counting discards.
    #[must_use]
    pub fn available(&self) -> usize {
        self.cards.len() + self.discards.len()
    }
}
