//! Deck walkthrough example: shuffle, sort, and deal the deck out.

use std::hash::{DefaultHasher, Hash, Hasher};

use carddeck::{DECK_SIZE, Deck};

fn hash_of(deck: &Deck) -> u64 {
    let mut hasher = DefaultHasher::new();
    deck.hash(&mut hasher);
    hasher.finish()
}

fn report(label: &str, deck: &Deck) {
    println!("{label}: {deck}");
    println!("hash code: {}", hash_of(deck));
    println!("deck size: {}", deck.size());
    println!();
}

fn main() {
    let mut deck = Deck::new();
    report("fresh deck", &deck);

    deck.shuffle();
    report("after first shuffle", &deck);

    deck.shuffle();
    report("after second shuffle", &deck);

    deck.sort();
    report("after sort", &deck);

    // Deal one past the end to show the empty-deck outcome.
    for i in 0..=DECK_SIZE {
        match deck.deal_one_card() {
            Some(card) => println!("card {i}: {card} (deck size: {})", deck.size()),
            None => println!("card {i}: no card, deck is empty"),
        }
    }
}
