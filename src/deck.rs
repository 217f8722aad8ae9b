//! Deck container and its mutation operations.

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A traditional deck of 52 cards, one for each rank/suit combination.
///
/// The deck owns its random number generator and is designed for
/// single-threaded use; it is not thread safe.
///
/// Cards are dealt from the end of the underlying list so that dealing
/// shrinks the list without shifting elements. The list is therefore kept in
/// reverse order: on initial population the highest card sits at position 0
/// and the lowest at the end, and an unshuffled deck deals the Ace of Clubs
/// first. [`Deck::sort`] and the `Display` rendering both account for this,
/// so callers only ever observe the conventional forward order.
///
/// # Example
///
/// ```
/// use carddeck::Deck;
///
/// let mut deck = Deck::from_seed(42);
/// deck.shuffle();
/// while let Some(card) = deck.deal_one_card() {
///     println!("{card}");
/// }
/// assert_eq!(deck.size(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards remaining, in reverse order (dealing end is the back).
    cards: Vec<Card>,
    /// Random number generator used by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck of 52 cards seeded from the operating system.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck of 52 cards with a seeded generator.
    ///
    /// Two decks built from the same seed produce identical shuffle
    /// sequences, which makes results reproducible.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.populate();
        deck
    }

    /// Appends one full 52-card set to whatever the deck currently holds.
    ///
    /// Called once during construction. Extensions can call it again to
    /// build a multi-deck shoe.
    pub fn populate(&mut self) {
        self.cards.reserve(DECK_SIZE);
        // Insert in reverse so the lowest card ends up at the dealing end.
        for &suit in Suit::ALL.iter().rev() {
            for &rank in Rank::ALL.iter().rev() {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Empties the deck of any remaining cards and repopulates it with 52.
    ///
    /// A reset deck is equal to a freshly constructed one.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.populate();
    }

    /// Sorts the deck into its conventional order: grouped by suit, then by
    /// rank within suit.
    ///
    /// This comparator is not the card's own ordering (which ignores suit);
    /// a sorted deck is equal to a freshly constructed one.
    pub fn sort(&mut self) {
        // Stored order is reversed, so sort descending.
        self.cards
            .sort_by(|a, b| b.suit().cmp(&a.suit()).then_with(|| b.rank().cmp(&a.rank())));
    }

    /// Shuffles the deck in place.
    ///
    /// Uses the Durstenfeld version of the Fisher-Yates shuffle: walk from
    /// the last index down to 1 and swap each position with a uniformly
    /// chosen index at or before it. Runs in O(n) time with no extra memory
    /// and, given a uniform generator, produces a uniform permutation. The
    /// swap index is drawn from `0..=i` inclusive; an exclusive bound would
    /// skew the distribution.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Deals one card from the deck.
    ///
    /// The dealt card is removed. Returns `None` once the deck is empty,
    /// which is a normal outcome for the caller to handle, not an error.
    pub fn deal_one_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards currently in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a read-only view of the cards, in internal (reverse) order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Deck {
    /// Two decks are equal iff they hold the same cards in the same order.
    /// The generator state is not part of a deck's value.
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Deck {}

impl Hash for Deck {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cards.hash(state);
    }
}

impl fmt::Display for Deck {
    /// Renders the deck in forward order, e.g.
    /// `[Ace of Clubs, Two of Clubs, ..., King of Spades]` when fresh.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
