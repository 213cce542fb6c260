use super::card::Card;
use serde::{Deserialize, Serialize};

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    pub name: String,
    /// The card dealt at the start of the night.
    pub dealt: Card,
    /// The card the player holds now; decides when the player wakes.
    pub card: Card,
    pub eliminated: bool,
}

impl Player {
    pub fn new(name: String, card: Card) -> Self {
        Self {
            name,
            dealt: card,
            card,
            eliminated: false,
        }
    }

    /// Whether the player currently holds a werewolf card.
    pub fn is_werewolf(&self) -> bool {
        self.card == Card::Werewolf
    }
}
