//! Deck integration tests.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use carddeck::{Card, DECK_SIZE, Deck, Rank, Suit};

fn hash_of(deck: &Deck) -> u64 {
    let mut hasher = DefaultHasher::new();
    deck.hash(&mut hasher);
    hasher.finish()
}

/// Cards sorted into a fixed order usable for multiset comparison.
/// Card's own ordering ignores suit, so sort by both ordinals here.
fn sorted_cards(deck: &Deck) -> Vec<Card> {
    let mut cards = deck.cards().to_vec();
    cards.sort_by_key(|c| (c.suit().ordinal(), c.rank().ordinal()));
    cards
}

#[test]
fn fresh_deck_has_52_distinct_cards() {
    let deck = Deck::from_seed(0);
    assert_eq!(deck.size(), DECK_SIZE);
    assert!(!deck.is_empty());

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn unshuffled_deck_deals_in_canonical_order() {
    let mut deck = Deck::from_seed(0);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            assert_eq!(deck.deal_one_card(), Some(Card::new(rank, suit)));
        }
    }
    assert!(deck.is_empty());
}

#[test]
fn dealing_past_empty_returns_none_and_size_stays_zero() {
    let mut deck = Deck::from_seed(3);
    deck.shuffle();

    let mut seen = HashSet::new();
    for remaining in (0..DECK_SIZE).rev() {
        let card = deck.deal_one_card().expect("deck should not be empty yet");
        assert!(seen.insert(card), "dealt {card} twice");
        assert_eq!(deck.size(), remaining);
    }

    assert_eq!(deck.deal_one_card(), None);
    assert_eq!(deck.size(), 0);
}

#[test]
fn reset_restores_a_fresh_deck() {
    let mut deck = Deck::from_seed(9);
    deck.shuffle();
    deck.deal_one_card();
    deck.deal_one_card();
    deck.shuffle();

    deck.reset();
    assert_eq!(deck, Deck::from_seed(123));
    assert_eq!(hash_of(&deck), hash_of(&Deck::from_seed(123)));
}

#[test]
fn sort_after_shuffle_restores_canonical_order() {
    let reference = Deck::from_seed(0);
    let mut deck = Deck::from_seed(7);
    deck.shuffle();
    assert_ne!(deck, reference);

    deck.sort();
    assert_eq!(deck, reference);
    assert_eq!(hash_of(&deck), hash_of(&reference));
}

#[test]
fn shuffle_preserves_size_and_card_multiset() {
    let reference = Deck::from_seed(0);
    let mut deck = Deck::from_seed(11);
    deck.shuffle();

    assert_eq!(deck.size(), DECK_SIZE);
    assert_eq!(sorted_cards(&deck), sorted_cards(&reference));
}

#[test]
fn shuffle_changes_order_and_hash() {
    let reference = Deck::from_seed(0);
    let mut deck = Deck::from_seed(5);
    deck.shuffle();

    // A 52-card shuffle landing back on the identity permutation has
    // probability 1/52!, so inequality is safe to assert with a fixed seed.
    assert_ne!(deck, reference);
    assert_ne!(hash_of(&deck), hash_of(&reference));
}

#[test]
fn shuffles_are_reproducible_from_the_same_seed() {
    let mut a = Deck::from_seed(99);
    let mut b = Deck::from_seed(99);
    a.shuffle();
    b.shuffle();
    assert_eq!(a, b);

    let mut c = Deck::from_seed(100);
    c.shuffle();
    assert_ne!(a, c);
}

#[test]
fn equality_is_over_the_ordered_cards() {
    let mut a = Deck::from_seed(1);
    let mut b = Deck::from_seed(2);
    assert_eq!(a, b);

    a.deal_one_card();
    assert_ne!(a, b);

    b.deal_one_card();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn populate_appends_a_second_set_for_shoes() {
    let mut shoe = Deck::from_seed(0);
    shoe.populate();
    assert_eq!(shoe.size(), 2 * DECK_SIZE);

    // Every card appears exactly twice.
    let mut dealt = Vec::new();
    while let Some(card) = shoe.deal_one_card() {
        dealt.push(card);
    }
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            let card = Card::new(rank, suit);
            assert_eq!(dealt.iter().filter(|&&c| c == card).count(), 2);
        }
    }
}

#[test]
fn display_renders_forward_canonical_order() {
    let deck = Deck::from_seed(0);
    let rendered = deck.to_string();
    assert!(rendered.starts_with("[Ace of Clubs, Two of Clubs, "));
    assert!(rendered.ends_with(", Queen of Spades, King of Spades]"));

    let mut empty = Deck::from_seed(0);
    while empty.deal_one_card().is_some() {}
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn shuffle_position_distribution_is_uniform() {
    const TRIALS: usize = 5200;
    let target = Card::new(Rank::Ace, Suit::Spades);
    let mut counts = [0usize; DECK_SIZE];

    let mut deck = Deck::from_seed(0x5EED);
    for _ in 0..TRIALS {
        deck.reset();
        deck.shuffle();
        let position = deck
            .cards()
            .iter()
            .position(|&c| c == target)
            .expect("card missing after shuffle");
        counts[position] += 1;
    }

    let expected = (TRIALS / DECK_SIZE) as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum();

    // 51 degrees of freedom; the 99.9th percentile is roughly 88. The seed
    // is fixed, so this either always passes or flags a biased shuffle.
    assert!(chi_square < 100.0, "chi-square statistic too large: {chi_square}");
}
