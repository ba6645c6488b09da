//! Session configuration options.

/// Total at which the dealer stops drawing. Fixed; there are no rule variants.
pub const DEALER_STANDS_ON: u8 = 17;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cmdjack::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_decks(2)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Seed for shuffling. `None` leaves the choice to the caller.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            seed: None,
        }
    }
}

impl SessionOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cmdjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cmdjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, or a fallback when none was set.
    ///
    /// With `std` the fallback comes from the system clock; without it the
    /// fallback is zero.
    #[must_use]
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(fallback_seed)
    }
}

#[cfg(feature = "std")]
fn fallback_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(not(feature = "std"))]
const fn fallback_seed() -> u64 {
    0
}
