//! Property tests for hand valuation and the dealer policy.

use cmdjack::{Card, DEALER_STANDS_ON, Hand, Outcome, Round, Shoe, Suit, TurnResult};
use proptest::prelude::*;

fn arb_card() -> impl Strategy<Value = Card> {
    let suit = prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ];
    (suit, 1u8..=13).prop_map(|(suit, rank)| Card::new(suit, rank))
}

fn hard_sum(hand: &Hand) -> u8 {
    hand.cards().iter().map(|c| c.value()).sum()
}

proptest! {
    #[test]
    fn total_is_hard_sum_or_one_promoted_ace(cards in prop::collection::vec(arb_card(), 0..10)) {
        let hand: Hand = cards.iter().copied().collect();
        let hard = hard_sum(&hand);
        let total = hand.total();

        if hand.is_soft() {
            prop_assert_eq!(total, hard + 10);
            prop_assert!(total <= 21);
            prop_assert!(cards.iter().any(|c| c.is_ace()));
        } else {
            prop_assert_eq!(total, hard);
        }

        if hand.is_bust() {
            // Every valuation busts, so no ace can be promoted.
            prop_assert!(!hand.is_soft());
            prop_assert!(hard > 21);
        }
    }

    #[test]
    fn soft_total_is_the_best_available(cards in prop::collection::vec(arb_card(), 1..10)) {
        let hand: Hand = cards.iter().copied().collect();
        let hard = hard_sum(&hand);
        let has_ace = cards.iter().any(|c| c.is_ace());

        prop_assert_eq!(hand.is_soft(), has_ace && hard + 10 <= 21);
    }

    #[test]
    fn blackjack_needs_exactly_two_cards(cards in prop::collection::vec(arb_card(), 1..8)) {
        let hand: Hand = cards.iter().copied().collect();
        prop_assert_eq!(hand.is_blackjack(), cards.len() == 2 && hand.total() == 21);
    }

    #[test]
    fn dealer_stops_exactly_at_seventeen(seed in any::<u64>()) {
        let mut shoe = Shoe::new(1, seed);
        let mut round = Round::deal(&mut shoe).unwrap();
        if round.opening() == TurnResult::PlayerBlackjack {
            return Ok(());
        }

        let result = round.stand(&mut shoe).unwrap();
        let dealer = round.dealer();
        prop_assert!(dealer.total() >= DEALER_STANDS_ON);

        // Every earlier prefix with at least the two dealt cards was below 17.
        for len in 2..dealer.len() {
            let prefix: Hand = dealer.cards()[..len].iter().copied().collect();
            prop_assert!(prefix.total() < DEALER_STANDS_ON);
        }

        let player = round.player().total();
        let expected = if dealer.is_bust() || player > dealer.total() {
            Outcome::PlayerWins
        } else if player < dealer.total() {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };
        prop_assert_eq!(result, TurnResult::DealerTurnComplete(expected));
    }
}
