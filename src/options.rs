//! Game configuration options.

/// What happens when the player draws from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckExhaustion {
    /// The draw is rejected; the player can only take from the discard pile.
    #[default]
    Stuck,
    /// Every discard except the top card is shuffled back into the deck
    /// before drawing.
    ReshuffleDiscards,
}

/// Configuration options for a rummy game.
///
/// The hand size and the initial discard are fixed by the rules and cannot
/// be configured.
///
/// ```
/// use rummy::{DeckExhaustion, GameOptions};
///
/// let options = GameOptions::default().with_exhaustion(DeckExhaustion::ReshuffleDiscards);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Behavior when the deck runs out.
    pub exhaustion: DeckExhaustion,
}

impl GameOptions {
    /// Sets the behavior when the deck runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use rummy::{DeckExhaustion, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(DeckExhaustion::ReshuffleDiscards);
    /// assert_eq!(options.exhaustion, DeckExhaustion::ReshuffleDiscards);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, exhaustion: DeckExhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}
