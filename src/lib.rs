//! A single-player simple Rummy engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the discard pile
//! and the player's hand, and enforces the draw-then-discard turn order.
//! The player wins by emptying their hand.
//!
//! # Example
//!
//! ```
//! use rummy::{Game, GameOptions, TurnPhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_game();
//!
//! let drawn = game.draw_from_deck().unwrap();
//! assert_eq!(game.turn_phase(), TurnPhase::Discard);
//!
//! game.discard(drawn).unwrap();
//! assert_eq!(game.top_discard(), Some(drawn));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use error::{DiscardError, DrawError, IntegrityError, ParseCardError};
pub use game::{Game, HAND_SIZE, RULES, TurnPhase};
pub use hand::Hand;
pub use options::{DeckExhaustion, GameOptions};
pub use snapshot::Snapshot;
