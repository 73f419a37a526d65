#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::DECK_SIZE;
use crate::error::IntegrityError;

use super::Game;

impl Game {
    /// Checks that the deck, discard pile and hand together hold exactly one
    /// full deck.
    ///
    /// Before the first [`Game::start_game`] every pile is empty and this
    /// reports all cards as missing.
    ///
    /// # Errors
    ///
    /// Returns the first card found twice, or the number of missing cards.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn verify_cards(&self) -> Result<(), IntegrityError> {
        let deck = self.deck.lock();
        let pile = self.discard_pile.lock();
        let hand = self.hand.lock();

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &card in deck.iter().chain(pile.iter()).chain(hand.cards()) {
            if !seen.insert(card) {
                return Err(IntegrityError::Duplicate(card));
            }
        }

        // Every distinct card is a standard card, so 52 distinct cards is the full deck.
        match DECK_SIZE - seen.len() {
            0 => Ok(()),
            missing => Err(IntegrityError::Missing(missing)),
        }
    }
}
