//! Interactive blackjack at the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::{ColoredString, Colorize};

use cmdjack::{
    Card, Command, Hand, Invocation, Outcome, Reply, RoundError, RoundState, Score, Session,
    SessionOptions, TurnResult,
};

/// Play blackjack against a dealer who stands on 17.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle, for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of 52-card decks in the shoe.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn options(&self) -> SessionOptions {
        let options = SessionOptions::default().with_decks(self.decks);
        match self.seed {
            Some(seed) => options.with_seed(seed),
            None => options,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut session = match Session::new(args.options()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Deal error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Blackjack. Type 'help' for commands.");
    print_opening(&session);

    // Non-UTF-8 input is rejected as an unknown word, not treated as end of input.
    let stdin = io::stdin();
    let mut lines = stdin.lock().split(b'\n');
    loop {
        print!("(blackjack) ");
        let _ = io::stdout().flush();

        let invocation = match lines.next() {
            Some(Ok(bytes)) => match Command::parse_line(&String::from_utf8_lossy(&bytes)) {
                Ok(Some(invocation)) => invocation,
                Ok(None) => continue,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
            Some(Err(err)) => {
                eprintln!("Input error: {err}");
                print_score(session.score());
                return ExitCode::FAILURE;
            }
            // End of input leaves the table like `exit`.
            None => {
                println!();
                Invocation {
                    command: Command::Exit,
                    topic: None,
                }
            }
        };

        match session.execute(invocation.command) {
            Ok(Reply::Exit(score)) => {
                print_score(score);
                return ExitCode::SUCCESS;
            }
            Ok(reply) => render(&session, reply, invocation.topic),
            Err(RoundError::EmptyShoe) => {
                eprintln!("The shoe is empty. Game over.");
                print_score(session.score());
                return ExitCode::FAILURE;
            }
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn render(session: &Session, reply: Reply, topic: Option<Command>) {
    match reply {
        Reply::Dealt(_) => print_opening(session),
        // Only the opening deal reports a blackjack; see `print_opening`.
        Reply::Turn(TurnResult::Continue | TurnResult::PlayerBlackjack) => {
            print_hand("Player", session.round().player());
        }
        Reply::Turn(TurnResult::PlayerBust) => {
            print_hand("Player", session.round().player());
            println!("{}", "Player busted.".red().bold());
            ask_another();
        }
        Reply::Turn(TurnResult::DealerTurnComplete(outcome)) => {
            print_hand("Dealer", session.round().dealer());
            print_outcome(outcome);
            ask_another();
        }
        Reply::RoundOver => ask_another(),
        Reply::RoundInProgress => println!("Finish this hand first."),
        Reply::ConfirmExit => println!("Just one hand? Say 'no' again to leave."),
        Reply::Help => print_help(topic),
        Reply::Exit(score) => print_score(score),
    }
}

fn print_opening(session: &Session) {
    let round = session.round();
    println!("\nShoe: {} cards remaining", session.shoe().len());

    let dealer = round.dealer();
    if round.state() == RoundState::PlayerTurn {
        let up = dealer
            .cards()
            .first()
            .map_or_else(|| "(no cards)".to_string(), format_card);
        println!("Dealer: {up} ??");
    } else {
        print_hand("Dealer", dealer);
    }
    print_hand("Player", round.player());

    if round.opening() == TurnResult::PlayerBlackjack {
        println!("{}", "Blackjack!".green().bold());
        if let Some(outcome) = round.outcome() {
            print_outcome(outcome);
        }
        ask_another();
    }
}

fn print_hand(label: &str, hand: &Hand) {
    let cards = if hand.is_empty() {
        "(empty)".to_string()
    } else {
        hand.cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let soft = if hand.is_soft() { " soft" } else { "" };
    println!("{label}: {cards} (total{soft} {})", hand.total());
}

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if card.suit.is_red() {
        text.red().to_string()
    } else {
        text.normal().to_string()
    }
}

fn print_outcome(outcome: Outcome) {
    let text: ColoredString = match outcome {
        Outcome::PlayerWins => "Player wins.".green().bold(),
        Outcome::DealerWins => "Dealer wins.".red().bold(),
        Outcome::Push => "Push.".yellow().bold(),
    };
    println!("{text}");
}

fn ask_another() {
    println!("Another hand? (yes/no)");
}

fn print_help(topic: Option<Command>) {
    if let Some(command) = topic {
        println!("{}: {}", command.aliases().join(", ").as_str().bold(), command.summary());
        return;
    }
    println!("Commands:");
    for command in Command::ALL {
        println!("  {:<8} {}", command.name().bold(), command.summary());
    }
}

fn print_score(score: Score) {
    println!("Dealer score: {}", score.dealer);
    println!("Player score: {}", score.player);
    if score.pushes > 0 {
        println!("Pushes: {}", score.pushes);
    }
}
