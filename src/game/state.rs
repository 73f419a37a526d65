//! Turn phase types.

/// Which half of the turn the player is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    /// The player must take a card from the deck or the discard pile.
    #[default]
    Draw,
    /// The player must put a card from their hand on the discard pile.
    Discard,
}

impl TurnPhase {
    /// Returns the instruction shown to the player for this phase.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Draw => "Draw a card from the deck or discard pile.",
            Self::Discard => "Discard a card from your hand.",
        }
    }
}
