//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A card has already been drawn this turn.
    #[error("a card must be discarded before drawing again")]
    MustDiscard,
    /// The chosen pile has no cards.
    #[error("the pile to draw from is empty")]
    EmptySource,
}

/// Errors that can occur when discarding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// No card has been drawn this turn.
    #[error("a card must be drawn before discarding")]
    MustDraw,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
}

/// Errors reported when the cards in play are not exactly one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// The card appears in more than one place.
    #[error("card {0} appears more than once")]
    Duplicate(Card),
    /// Some cards are in none of the deck, discard pile or hand.
    #[error("{0} cards are missing")]
    Missing(usize),
}

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is empty.
    #[error("card text is empty")]
    Empty,
    /// The rank part is not one of `A 2 3 4 5 6 7 8 9 10 J Q K`.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit part is not a suit symbol or `S H D C`.
    #[error("invalid suit")]
    InvalidSuit,
}
