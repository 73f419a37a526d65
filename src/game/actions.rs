use core::sync::atomic::Ordering;

use crate::card::Card;
use crate::error::{DiscardError, DrawError};
use crate::hand::Hand;
use crate::options::DeckExhaustion;

use super::{Game, TurnPhase};

impl Game {
    /// Draws the top card of the deck into the player's hand.
    ///
    /// Returns the drawn card. On error nothing changes, so ignoring the
    /// result treats an illegal draw as a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has already been drawn this turn, or the
    /// deck is empty and cannot be restocked.
    pub fn draw_from_deck(&self) -> Result<Card, DrawError> {
        self.try_draw_from_deck()
            .inspect(|card| log::debug!("drew {card} from the deck"))
            .inspect_err(|err| log::trace!("draw from deck rejected: {err}"))
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "the phase lock is held for the entire draw"
    )]
    fn try_draw_from_deck(&self) -> Result<Card, DrawError> {
        let mut phase = self.phase.lock();
        if *phase != TurnPhase::Draw {
            return Err(DrawError::MustDiscard);
        }

        let mut deck = self.deck.lock();
        if deck.is_empty() {
            let mut pile = self.discard_pile.lock();
            self.restock(&mut deck, &mut pile);
        }
        let card = deck.pop().ok_or(DrawError::EmptySource)?;

        self.hand.lock().add_card(card);
        *phase = TurnPhase::Discard;
        Ok(card)
    }

    /// Draws the top card of the discard pile into the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has already been drawn this turn or the
    /// discard pile is empty.
    pub fn draw_from_discard(&self) -> Result<Card, DrawError> {
        self.try_draw_from_discard()
            .inspect(|card| log::debug!("drew {card} from the discard pile"))
            .inspect_err(|err| log::trace!("draw from discard pile rejected: {err}"))
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "the phase lock is held for the entire draw"
    )]
    fn try_draw_from_discard(&self) -> Result<Card, DrawError> {
        let mut phase = self.phase.lock();
        if *phase != TurnPhase::Draw {
            return Err(DrawError::MustDiscard);
        }

        let card = self
            .discard_pile
            .lock()
            .pop()
            .ok_or(DrawError::EmptySource)?;

        self.hand.lock().add_card(card);
        *phase = TurnPhase::Discard;
        Ok(card)
    }

    /// Moves `card` from the player's hand to the top of the discard pile and
    /// ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no card has been drawn this turn or the player does
    /// not hold `card`.
    pub fn discard(&self, card: Card) -> Result<(), DiscardError> {
        self.try_discard(card)
            .inspect(|()| log::debug!("discarded {card}"))
            .inspect_err(|err| log::trace!("discard of {card} rejected: {err}"))
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    fn try_discard(&self, card: Card) -> Result<(), DiscardError> {
        let mut phase = self.phase.lock();
        if *phase != TurnPhase::Discard {
            return Err(DiscardError::MustDraw);
        }

        let mut pile = self.discard_pile.lock();
        let mut hand = self.hand.lock();
        if !hand.remove_card(card) {
            return Err(DiscardError::CardNotInHand);
        }

        pile.push(card);
        *phase = TurnPhase::Draw;
        self.check_for_winner(&hand);
        Ok(())
    }

    /// Marks the player as the winner once their hand is empty.
    fn check_for_winner(&self, hand: &Hand) {
        if hand.is_empty() && !self.winner.swap(true, Ordering::SeqCst) {
            log::info!("player emptied their hand");
        }
    }

    /// Returns whether [`Game::draw_from_deck`] would succeed.
    pub fn can_draw_from_deck(&self) -> bool {
        let phase = self.phase.lock();
        if *phase != TurnPhase::Draw {
            return false;
        }

        let deck = self.deck.lock();
        !deck.is_empty()
            || (self.options.exhaustion == DeckExhaustion::ReshuffleDiscards
                && self.discard_pile.lock().len() > 1)
    }

    /// Returns whether [`Game::draw_from_discard`] would succeed.
    pub fn can_draw_from_discard(&self) -> bool {
        let phase = self.phase.lock();
        *phase == TurnPhase::Draw && !self.discard_pile.lock().is_empty()
    }

    /// Returns whether [`Game::discard`] would succeed for `card`.
    pub fn can_discard(&self, card: Card) -> bool {
        let phase = self.phase.lock();
        *phase == TurnPhase::Discard && self.hand.lock().contains(card)
    }
}
