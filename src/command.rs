//! Command words understood by the interactive loop.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::CommandError;

/// A verb typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw a card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
    /// Start the next round.
    Deal,
    /// Decline another round.
    Decline,
    /// Show help.
    Help,
    /// Leave the table.
    Exit,
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Self; 6] = [
        Self::Hit,
        Self::Stand,
        Self::Deal,
        Self::Decline,
        Self::Help,
        Self::Exit,
    ];

    /// Canonical name of the command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Deal => "deal",
            Self::Decline => "no",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Every word accepted for the command, canonical name first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Hit => &["hit"],
            Self::Stand => &["stand", "pass"],
            Self::Deal => &["deal", "yes", "another", "newhand"],
            Self::Decline => &["no"],
            Self::Help => &["help", "?"],
            Self::Exit => &["exit", "quit", "eof"],
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Hit => "Deal another card to your hand",
            Self::Stand => "Keep your hand; the dealer plays out theirs",
            Self::Deal => "Play a fresh hand once the current one is over",
            Self::Decline => "Don't play another hand and leave the table",
            Self::Help => "List commands, or describe one with `help <command>`",
            Self::Exit => "Quit this blackjack session",
        }
    }

    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Only `help` accepts an argument,
    /// which must itself name a command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unrecognized`] for an unknown word and
    /// [`CommandError::UnexpectedArgument`] when a command other than `help`
    /// is followed by more text.
    pub fn parse_line(line: &str) -> Result<Option<Invocation>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let command: Self = word.parse()?;
        let argument = words.next();

        if words.next().is_some() || (argument.is_some() && command != Self::Help) {
            return Err(CommandError::UnexpectedArgument(command.name()));
        }

        let topic = argument.map(str::parse::<Self>).transpose()?;
        Ok(Some(Invocation { command, topic }))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        let word = word.trim();
        Self::ALL
            .into_iter()
            .find(|command| {
                command
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(word))
            })
            .ok_or_else(|| CommandError::Unrecognized(word.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed input line: the command and, for `help`, the command asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    /// The command to run.
    pub command: Command,
    /// Command named after `help`, if any.
    pub topic: Option<Command>,
}
