//! A command-driven blackjack game with an optional `no_std` rules core.
//!
//! The crate provides a [`Round`] engine that plays one hand between a player
//! and a dealer who stands on 17, a [`Shoe`] that reshuffles its discards when
//! it runs dry, and a [`Session`] that turns typed [`Command`]s into replies
//! for an interactive shell.
//!
//! # Example
//!
//! ```
//! use cmdjack::{Command, Reply, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default().with_seed(42)).unwrap();
//! let reply = session.execute(Command::Help).unwrap();
//! assert_eq!(reply, Reply::Help);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod command;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use command::{Command, Invocation};
pub use error::{CommandError, RoundError, ShoeError};
pub use hand::Hand;
pub use options::{DEALER_STANDS_ON, SessionOptions};
pub use result::{Outcome, Score, TurnResult};
pub use round::{Action, Round, RoundState};
pub use session::{Reply, Session};
pub use shoe::Shoe;
