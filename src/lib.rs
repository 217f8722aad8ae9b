//! A standard 52-card deck model with optional `no_std` support.
//!
//! The crate provides immutable [`Card`] values built from [`Rank`] and
//! [`Suit`], and a [`Deck`] that supports shuffling, sorting, dealing, and
//! value-based equality.
//!
//! # Example
//!
//! ```
//! use carddeck::{Deck, Rank};
//!
//! let mut deck = Deck::from_seed(42);
//! deck.shuffle();
//! let card = deck.deal_one_card().unwrap();
//! assert_eq!(deck.size(), 51);
//! let _ = card.rank() >= Rank::Jack;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::CardError;
