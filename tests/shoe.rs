//! Shoe integration tests.

use std::collections::HashSet;

use cmdjack::{Card, DECK_SIZE, Shoe, ShoeError, Suit};

#[test]
fn new_shoe_holds_every_card_once() {
    let mut shoe = Shoe::new(1, 3);
    assert_eq!(shoe.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Ok(card) = shoe.draw() {
        assert!(seen.insert(card), "{card} dealt twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Empty);
}

#[test]
fn deck_count_scales_the_shoe() {
    assert_eq!(Shoe::new(2, 3).len(), 2 * DECK_SIZE);
    assert_eq!(Shoe::new(0, 3).len(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(1, 99);
    let mut b = Shoe::new(1, 99);
    for _ in 0..DECK_SIZE {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn stacked_shoe_deals_in_order() {
    let draws = [
        Card::new(Suit::Hearts, 1),
        Card::new(Suit::Clubs, 2),
        Card::new(Suit::Spades, 3),
    ];
    let mut shoe = Shoe::stacked(&draws, 0);

    for expected in draws {
        assert_eq!(shoe.draw(), Ok(expected));
    }
    assert!(shoe.is_empty());
}

#[test]
fn draw_or_reshuffle_uses_discards() {
    let mut shoe = Shoe::stacked(&[Card::new(Suit::Hearts, 5)], 0);
    let discards = [
        Card::new(Suit::Clubs, 6),
        Card::new(Suit::Spades, 7),
        Card::new(Suit::Diamonds, 8),
    ];
    shoe.discard(discards);
    assert_eq!(shoe.available(), 4);

    assert_eq!(shoe.draw_or_reshuffle(), Ok(Card::new(Suit::Hearts, 5)));
    assert_eq!(shoe.discarded(), 3);

    let card = shoe.draw_or_reshuffle().unwrap();
    assert!(discards.contains(&card));
    assert_eq!(shoe.discarded(), 0);
    assert_eq!(shoe.len(), 2);
}

#[test]
fn draw_or_reshuffle_fails_when_everything_is_out() {
    let mut shoe = Shoe::stacked(&[], 0);
    assert!(!shoe.reshuffle_discards());
    assert_eq!(shoe.draw_or_reshuffle().unwrap_err(), ShoeError::Empty);
}

#[test]
fn shuffle_restores_a_full_shoe() {
    let mut shoe = Shoe::new(1, 11);
    let played: Vec<Card> = (0..10).map(|_| shoe.draw().unwrap()).collect();
    shoe.discard(played);
    assert_eq!(shoe.len(), DECK_SIZE - 10);
    assert_eq!(shoe.discarded(), 10);

    shoe.shuffle();
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.discarded(), 0);
}

#[test]
fn card_display_names_the_rank() {
    assert_eq!(Card::new(Suit::Spades, 1).to_string(), "Ace of Spades");
    assert_eq!(Card::new(Suit::Hearts, 5).to_string(), "5 of Hearts");
    assert_eq!(Card::new(Suit::Diamonds, 11).to_string(), "Jack of Diamonds");
    assert_eq!(Card::new(Suit::Clubs, 13).to_string(), "King of Clubs");
}
