//! Game engine and state management.

use core::sync::atomic::{AtomicBool, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, standard_deck};
use crate::hand::Hand;
use crate::options::{DeckExhaustion, GameOptions};
use crate::snapshot::Snapshot;

mod actions;
mod integrity;
pub mod state;

pub use state::TurnPhase;

/// Number of cards dealt to the player at the start of a game.
pub const HAND_SIZE: usize = 10;

/// How to play, as shown to the player.
pub const RULES: &str = "This is a simple version of Rummy. The goal is to get rid of all your \
cards. On your turn, first draw a card from either the deck or the discard pile. Then, discard \
one card from your hand by clicking on it.";

/// A single-player rummy game.
///
/// The game owns the deck, the discard pile, the player's hand and the turn
/// phase. Every card dealt by [`Game::start_game`] stays in exactly one of
/// those three places until the next game is started.
///
/// Code that holds several locks at once takes them in this order: `phase`,
/// `deck`, `discard_pile`, `hand`, then the random number generator.
pub struct Game {
    /// Face-down cards; the last element is the top.
    pub deck: Mutex<Vec<Card>>,
    /// Discarded cards; the last element is the top.
    pub discard_pile: Mutex<Vec<Card>>,
    /// The player's hand.
    pub hand: Mutex<Hand>,
    /// Current turn phase.
    pub phase: Mutex<TurnPhase>,
    /// Whether the player has emptied their hand.
    pub winner: AtomicBool,
    /// Game options.
    pub options: GameOptions,
    /// Random number generator and the seed it was created from.
    rng: Mutex<SeededRng>,
}

struct SeededRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Nothing is dealt until [`Game::start_game`] is called; until then all
    /// piles are empty and every draw fails.
    ///
    /// # Example
    ///
    /// ```
    /// use rummy::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.start_game();
    /// assert_eq!(game.player_hand().len(), 10);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Vec::new()),
            discard_pile: Mutex::new(Vec::new()),
            hand: Mutex::new(Hand::new()),
            phase: Mutex::new(TurnPhase::Draw),
            winner: AtomicBool::new(false),
            options,
            rng: Mutex::new(SeededRng::new(seed)),
        }
    }

    /// Starts a new game, abandoning any game in progress.
    ///
    /// A full deck is shuffled, ten cards are dealt to the player and one
    /// card is turned onto the discard pile.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the whole table is replaced under one set of locks"
    )]
    pub fn start_game(&self) {
        let mut phase = self.phase.lock();
        let mut deck = self.deck.lock();
        let mut pile = self.discard_pile.lock();
        let mut hand = self.hand.lock();
        let mut rng = self.rng.lock();

        let mut cards = standard_deck();
        cards.shuffle(&mut rng.rng);

        let dealt: Vec<Card> = (0..HAND_SIZE).filter_map(|_| cards.pop()).collect();
        *hand = Hand::from(dealt);
        *pile = cards.pop().into_iter().collect();
        *deck = cards;
        *phase = TurnPhase::Draw;
        self.winner.store(false, Ordering::SeqCst);

        log::debug!("started a new game (seed {})", rng.seed);
    }

    /// Replaces the random number generator; later shuffles follow `seed`.
    ///
    /// The game in progress is left as it is.
    pub fn reseed(&self, seed: u64) {
        self.rng.replace(SeededRng::new(seed));
        log::debug!("reseeded with {seed}");
    }

    /// Refills an empty deck from the discard pile when the options allow it.
    ///
    /// The caller holds the deck and discard pile locks. The top discard stays
    /// where it is.
    fn restock(&self, deck: &mut Vec<Card>, pile: &mut Vec<Card>) {
        if self.options.exhaustion != DeckExhaustion::ReshuffleDiscards || pile.len() < 2 {
            return;
        }

        let top_index = pile.len() - 1;
        let top = pile.split_off(top_index);
        deck.append(pile);
        deck.shuffle(&mut self.rng.lock().rng);
        *pile = top;

        log::debug!("reshuffled {} discards into the deck", deck.len());
    }

    /// Returns the seed of the current random number generator.
    pub fn seed(&self) -> u64 {
        self.rng.lock().seed
    }

    /// Returns the current turn phase.
    pub fn turn_phase(&self) -> TurnPhase {
        *self.phase.lock()
    }

    /// Returns whether the player has won.
    pub fn is_winner(&self) -> bool {
        self.winner.load(Ordering::SeqCst)
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a copy of the deck, top card last.
    pub fn deck(&self) -> Vec<Card> {
        self.deck.lock().clone()
    }

    /// Returns a copy of the discard pile, top card last.
    pub fn discard_pile(&self) -> Vec<Card> {
        self.discard_pile.lock().clone()
    }

    /// Returns the top of the discard pile, the only card that can be drawn
    /// from it.
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.lock().last().copied()
    }

    /// Returns a copy of the player's hand.
    pub fn player_hand(&self) -> Vec<Card> {
        self.hand.lock().cards().to_vec()
    }

    /// Captures the observable state for rendering.
    ///
    /// All piles are read under one set of locks, so the snapshot never mixes
    /// the state before and after an action.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held until every pile has been read"
    )]
    pub fn snapshot(&self) -> Snapshot {
        let phase = self.phase.lock();
        let deck = self.deck.lock();
        let pile = self.discard_pile.lock();
        let hand = self.hand.lock();

        Snapshot {
            deck_len: deck.len(),
            discard_pile: pile.clone(),
            top_discard: pile.last().copied(),
            player_hand: hand.cards().to_vec(),
            turn_phase: *phase,
            winner: self.is_winner(),
        }
    }
}
