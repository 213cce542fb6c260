use super::{card::Card, options::TABLE_CARDS, player::Player};
use serde::{Deserialize, Serialize};

/// The team that won the game.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Winner {
    /// A werewolf was eliminated, or the village spared everyone when there were no werewolves.
    Village,
    /// The tanner and a werewolf were both eliminated.
    TannerAndVillage,
    /// The tanner was eliminated.
    Tanner,
    /// No werewolf was eliminated.
    Werewolves,
    /// Nobody held a werewolf, yet the village eliminated someone.
    NoOne,
}

/// A player's dealt and final cards.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PlayerResult {
    pub name: String,
    pub dealt: Card,
    pub card: Card,
    pub eliminated: bool,
}

/// Everything revealed once the game is over.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GameResults {
    pub winner: Winner,
    pub players: Vec<PlayerResult>,
    pub dealt_table: [Card; TABLE_CARDS],
    pub table: [Card; TABLE_CARDS],
}

/// Decides the winning team from the final cards and who was eliminated.
pub fn winner(players: &[Player]) -> Winner {
    let died = |card: Card| players.iter().any(|p| p.eliminated && p.card == card);

    if died(Card::Tanner) {
        return if died(Card::Werewolf) {
            Winner::TannerAndVillage
        } else {
            Winner::Tanner
        };
    }
    if died(Card::Werewolf) {
        return Winner::Village;
    }
    if players.iter().any(Player::is_werewolf) {
        return Winner::Werewolves;
    }

    // Nobody holds a werewolf card
    let anyone_died = players.iter().any(|p| p.eliminated);
    let minion_survived = players
        .iter()
        .any(|p| p.card == Card::Minion && !p.eliminated);
    if !anyone_died || died(Card::Minion) {
        Winner::Village
    } else if minion_survived {
        Winner::Werewolves
    } else {
        Winner::NoOne
    }
}
