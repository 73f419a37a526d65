//! Read-only view of a game for rendering.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::TurnPhase;

/// Everything a presentation layer needs to draw the table.
///
/// The deck is face down, so only its size is captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of cards left in the deck.
    pub deck_len: usize,
    /// The discard pile, top card last.
    pub discard_pile: Vec<Card>,
    /// The top of the discard pile.
    pub top_discard: Option<Card>,
    /// The player's hand in display order.
    pub player_hand: Vec<Card>,
    /// Current turn phase.
    pub turn_phase: TurnPhase,
    /// Whether the player has won.
    pub winner: bool,
}

impl Snapshot {
    /// Returns the instruction for the player, or `None` once they have won.
    #[must_use]
    pub const fn prompt(&self) -> Option<&'static str> {
        if self.winner {
            None
        } else {
            Some(self.turn_phase.prompt())
        }
    }

    /// Returns whether hand cards can be clicked to discard them.
    #[must_use]
    pub fn hand_is_discardable(&self) -> bool {
        self.turn_phase == TurnPhase::Discard
    }
}
